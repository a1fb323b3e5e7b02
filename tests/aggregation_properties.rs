//! Property-based tests for the developer fan-out
//!
//! Detail calls finish in random order; the merged output must still follow
//! the listing, and a single failed call must leave its listing record intact.

mod common;

use app_showcase::domain::record::fields;
use app_showcase::providers::StoreError;
use app_showcase::Aggregator;
use common::{catalog, listing_record, ScriptedStore};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

/// Per-app detail latencies in milliseconds, one per listing entry
fn latencies() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..25, 0..12)
}

fn app_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("com.example.app{i}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn output_follows_listing_order(delays in latencies()) {
        let ids = app_ids(delays.len());
        let store = ids.iter().zip(&delays).fold(
            ScriptedStore::new().listing(ids.iter().map(|id| listing_record(id)).collect()),
            |store, (id, delay)| store.detail(id, Duration::from_millis(*delay)),
        );
        let aggregator = Aggregator::new(Arc::new(store), catalog());

        let apps = runtime().block_on(aggregator.fetch_developer_apps()).unwrap();

        prop_assert_eq!(apps.len(), ids.len());
        for (app, id) in apps.iter().zip(&ids) {
            prop_assert_eq!(app.app_id.as_ref(), id.as_str());
            prop_assert_eq!(app.installs.as_str(), "5,000+");
        }
    }

    #[test]
    fn one_failed_detail_keeps_its_listing_record(
        delays in prop::collection::vec(0u64..25, 1..10),
        failing in any::<prop::sample::Index>(),
    ) {
        let ids = app_ids(delays.len());
        let failing = failing.index(ids.len());

        let store = ids.iter().zip(&delays).enumerate().fold(
            ScriptedStore::new().listing(ids.iter().map(|id| listing_record(id)).collect()),
            |store, (position, (id, delay))| {
                let delay = Duration::from_millis(*delay);
                if position == failing {
                    store.detail_fails(id, delay, StoreError::Status { status: 500 })
                } else {
                    store.detail(id, delay)
                }
            },
        );
        let aggregator = Aggregator::new(Arc::new(store), catalog());

        let merged = runtime()
            .block_on(aggregator.fetch_developer_records())
            .unwrap();

        prop_assert_eq!(merged.len(), ids.len());
        for (position, app) in merged.iter().enumerate() {
            prop_assert_eq!(app.app_id.as_ref(), ids[position].as_str());
            if position == failing {
                prop_assert!(!app.detail_merged);
                prop_assert_eq!(&app.record, &listing_record(&ids[position]));
                prop_assert!(!app.record.contains(fields::INSTALLS));
            } else {
                prop_assert!(app.detail_merged);
                prop_assert_eq!(app.record.str_field(fields::INSTALLS), Some("5,000+"));
            }
        }
    }
}
