//! Property tests for the in-memory table store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ao_tables::domain::entities::AoTable;
use ao_tables::domain::value_objects::TableId;
use ao_tables::infrastructure::persistence::TableRepository;
use ao_tables::infrastructure::persistence::in_memory::InMemoryTableRepository;
use proptest::prelude::*;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn table_strategy() -> impl Strategy<Value = AoTable> {
    (
        proptest::option::of("[a-zA-Z0-9 ]{0,40}"),
        proptest::option::of("[a-z ]{0,60}"),
        proptest::option::of("[a-z]{0,16}"),
        any::<[bool; 7]>(),
    )
        .prop_map(|(name, description, table_type, flags)| {
            let [boundary, cache, history, identifier, log, notify, premium] = flags;
            AoTable {
                id: TableId::nil(),
                name,
                description,
                table_type,
                comment: None,
                boundary,
                cache,
                history,
                identifier,
                log,
                notify,
                premium,
            }
        })
}

proptest! {
    #[test]
    fn unknown_ids_are_absent_everywhere(raw in any::<u128>(), table in table_strategy()) {
        let rt = runtime();
        let repo = InMemoryTableRepository::new();
        let id = TableId::new(Uuid::from_u128(raw));

        rt.block_on(async {
            prop_assert!(!repo.exists(&id).await.unwrap());
            prop_assert!(repo.get(&id).await.unwrap().is_none());
            prop_assert!(!repo.update(&id, &table).await.unwrap());
            prop_assert!(!repo.delete(&id).await.unwrap());
            prop_assert_eq!(repo.count().await.unwrap(), 0);
            Ok(())
        })?;
    }

    #[test]
    fn insert_regenerates_id_and_is_retrievable(raw in any::<u128>(), table in table_strategy()) {
        let rt = runtime();
        let repo = InMemoryTableRepository::new();
        let supplied = TableId::new(Uuid::from_u128(raw));

        rt.block_on(async {
            let stored = repo.insert(table.clone().with_id(supplied)).await.unwrap();
            prop_assert_ne!(stored.id, supplied);
            prop_assert_eq!(repo.get(&stored.id).await.unwrap(), Some(table.with_id(stored.id)));
            Ok(())
        })?;
    }

    #[test]
    fn update_replaces_all_fields_idempotently(
        original in table_strategy(),
        replacement in table_strategy(),
    ) {
        let rt = runtime();
        let repo = InMemoryTableRepository::new();

        rt.block_on(async {
            let stored = repo.insert(original).await.unwrap();
            let expected = replacement.clone().with_id(stored.id);

            prop_assert!(repo.update(&stored.id, &replacement).await.unwrap());
            let first = repo.get(&stored.id).await.unwrap();
            prop_assert!(repo.update(&stored.id, &replacement).await.unwrap());
            let second = repo.get(&stored.id).await.unwrap();

            prop_assert_eq!(first.as_ref(), Some(&expected));
            prop_assert_eq!(first, second);
            Ok(())
        })?;
    }

    #[test]
    fn delete_removes_and_repeats_harmlessly(tables in proptest::collection::vec(table_strategy(), 1..8)) {
        let rt = runtime();
        let repo = InMemoryTableRepository::new();

        rt.block_on(async {
            let mut ids = Vec::new();
            for table in tables {
                ids.push(repo.insert(table).await.unwrap().id);
            }

            for (removed, id) in ids.iter().enumerate() {
                prop_assert!(repo.delete(id).await.unwrap());
                prop_assert!(!repo.exists(id).await.unwrap());
                prop_assert!(!repo.delete(id).await.unwrap());
                prop_assert_eq!(repo.count().await.unwrap(), (ids.len() - removed - 1) as u64);
            }
            prop_assert!(repo.get_all().await.unwrap().is_empty());
            Ok(())
        })?;
    }
}
