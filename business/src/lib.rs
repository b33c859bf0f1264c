pub mod application {
    pub mod extraction {
        pub mod extract;
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod extraction {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod extract;
            pub mod get_all;
        }
    }
}
