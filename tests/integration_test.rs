use std::collections::HashMap;

use fake::{
    faker::{company::en::CatchPhrase, lorem::en::Sentence},
    Dummy, Fake, Faker,
};
use penumbra::{
    collections::{ChainedHashTable, DEFAULT_CAPACITY, LOAD_FACTOR},
    command::Command,
    registry::{Registry, Response},
    table,
};

#[derive(Debug, Dummy)]
struct License {
    #[dummy(faker = "1000..9999")]
    batch: u16,
    #[dummy(faker = "CatchPhrase()")]
    product: String,
    #[dummy(faker = "Sentence(1..8)")]
    notes: String,
}

impl License {
    fn description(&self) -> String {
        format!("{} (batch {}): {}", self.product, self.batch, self.notes)
    }
}

fn serial(n: usize) -> String {
    format!("SN-{n:06}")
}

fn assert_placement(table: &ChainedHashTable<String, String>) {
    let mut keys = Vec::new();

    for (index, key, _) in table {
        assert_eq!(index, table.bucket_index(key));
        keys.push(key);
    }

    let total = keys.len();
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), total, "duplicated keys");
    assert_eq!(total, table.len());
}

#[test]
fn growth_scenario() {
    let mut table = ChainedHashTable::new();
    assert_eq!(table.capacity(), DEFAULT_CAPACITY);

    let licenses: Vec<License> = (0..6).map(|_| Faker.fake()).collect();

    for (n, license) in licenses.iter().enumerate().take(5) {
        table.put(format!("S{}", n + 1), license.description());
    }
    assert_eq!(table.capacity(), 7);
    assert!(table.load_factor() < LOAD_FACTOR);

    table.put("S6".to_string(), licenses[5].description());
    assert_eq!(table.capacity(), 14);

    for (n, license) in licenses.iter().enumerate() {
        assert_eq!(
            table.get(format!("S{}", n + 1).as_str()),
            Some(&license.description())
        );
    }
    assert_placement(&table);
}

#[test]
fn rehash_preserves_last_written_values() {
    let mut table = ChainedHashTable::new();
    let mut expected = HashMap::new();

    for n in 0..2_000 {
        let description: String = Sentence(1..6).fake();
        let key = serial(n % 700);
        let capacity = table.capacity();

        let inserted = !expected.contains_key(&key);
        table.put(key.clone(), description.clone());
        expected.insert(key, description);

        if inserted && table.capacity() != capacity {
            assert_eq!(table.capacity(), capacity * 2);
            for (key, value) in &expected {
                assert_eq!(table.get(key.as_str()), Some(value));
            }
        }
        if !inserted {
            assert_eq!(table.capacity(), capacity);
        }
    }

    assert_eq!(table.len(), 700);
    assert_placement(&table);
}

#[test]
fn behaves_like_std_hash_map() {
    let mut table = ChainedHashTable::new();
    let mut model = HashMap::new();

    for _ in 0..5_000 {
        let key = serial((0..300).fake::<usize>());

        match (0..4).fake::<u8>() {
            0 | 1 => {
                let value: String = CatchPhrase().fake();
                assert_eq!(
                    table.put(key.clone(), value.clone()),
                    model.insert(key, value)
                );
            }
            2 => assert_eq!(table.get(key.as_str()), model.get(&key)),
            _ => assert_eq!(table.remove(key.as_str()), model.remove(&key)),
        }

        assert_eq!(table.len(), model.len());
    }

    assert_placement(&table);
    for (_, key, value) in &table {
        assert_eq!(model.get(key), Some(value));
    }
}

#[test]
fn remove_contract() {
    let mut table = table! {
        "S1".to_string() => "Office".to_string(),
        "S2".to_string() => "IDE".to_string(),
    };

    assert_eq!(table.remove("missing"), None);
    assert_eq!(table.len(), 2);

    assert_eq!(table.remove("S2").as_deref(), Some("IDE"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("S2"), None);
}

#[test]
fn registry_session() {
    let mut registry = Registry::new();
    let licenses: Vec<License> = (0..50).map(|_| Faker.fake()).collect();

    for (n, license) in licenses.iter().enumerate() {
        let command = Command::Add {
            serial: serial(n),
            description: license.description(),
        };
        assert_eq!(registry.exec(command), Response::Added);
    }

    for n in (0..50).step_by(2) {
        let command: Command = format!("delete {}", serial(n)).parse().unwrap();
        assert_eq!(registry.exec(command), Response::Deleted);
    }

    for (n, license) in licenses.iter().enumerate() {
        let command: Command = format!("2 {}", serial(n)).parse().unwrap();
        let expected = match n % 2 {
            0 => Response::NotFound,
            _ => Response::Found(license.description()),
        };

        assert_eq!(registry.exec(command), expected);
    }

    assert_eq!(registry.licenses().len(), 25);
    assert_eq!(registry.licenses().capacity(), 112);
}
