//! Kairos calendar server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every
//! layer through `kairos_test::` paths.

pub mod component {
    pub use kairos_core::*;

    pub mod calendar {
        pub use kairos_service::calendar::*;
        pub use kairos_service::error::*;
    }

    pub mod store {
        pub use kairos_store::error::*;
        pub use kairos_store::model::*;
        pub use kairos_store::store::*;
    }
}

pub mod app {
    pub use kairos_app::*;

    pub mod api {
        pub use kairos_app::app::api::*;
    }
}
