use carelink_core::errors::CareResult;
use mockall::mock;

use crate::storage::LocalStorage;

// Mock storage backend for testing failure paths
mock! {
    pub Storage {}

    impl LocalStorage for Storage {
        fn get_item(&self, key: &str) -> CareResult<Option<String>>;

        fn set_item(&self, key: &str, value: &str) -> CareResult<()>;

        fn remove_item(&self, key: &str) -> CareResult<()>;
    }
}
