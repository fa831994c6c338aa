pub mod error;

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod batch;
    pub mod conversion;
    pub mod file;
    pub mod table;
}

pub mod service {
    pub mod config_service;
    pub mod decompress;
    pub mod file;
    pub mod log_sink;
    pub mod table;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod utils {
    pub mod summary;
    pub mod utils;
}
