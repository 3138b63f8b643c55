use mockall::mock;

use crate::notify::{Confirmer, Notifier};

mock! {
    pub Notifier {}

    impl Notifier for Notifier {
        fn success(&self, message: &str);

        fn failure(&self, message: &str);
    }
}

mock! {
    pub Confirmer {}

    impl Confirmer for Confirmer {
        fn confirm(&self, prompt: &str) -> bool;
    }
}
