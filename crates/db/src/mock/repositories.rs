use async_trait::async_trait;
use eagerbirds_core::{
    errors::SlotResult,
    models::{
        principal::Principal,
        slot::{NewSlot, Slot, SlotScope},
    },
    session::TokenVerifier,
    store::SlotStore,
};
use mockall::mock;
use uuid::Uuid;

// Mock adapters for testing
mock! {
    pub SlotRepo {}

    #[async_trait]
    impl SlotStore for SlotRepo {
        async fn list_slots(&self, scope: SlotScope) -> eyre::Result<Vec<Slot>>;

        async fn get_slot(&self, id: Uuid) -> eyre::Result<Option<Slot>>;

        async fn insert_slot(&self, slot: NewSlot) -> eyre::Result<Slot>;

        async fn delete_slot(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub AuthRepo {}

    #[async_trait]
    impl TokenVerifier for AuthRepo {
        async fn principal_for_token(&self, token: &str) -> SlotResult<Option<Principal>>;
    }
}
