// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod infrastructure {
        pub mod table_store;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod product;
        }
        pub mod ports;
        pub mod adapters {
            pub mod table_service;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod reviews {
        pub mod core {
            pub mod order_key;
            pub mod review;
        }
        pub mod ports;
        pub mod adapters {
            pub mod table_service;
        }
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
