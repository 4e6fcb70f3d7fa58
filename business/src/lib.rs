pub mod application {
    pub mod product {
        pub mod brand_summary;
        pub mod create;
        pub mod delete;
        pub mod get_by_key;
        pub mod list;
        pub mod seed;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod paging;
        pub mod repository;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod brand_summary;
            pub mod create;
            pub mod delete;
            pub mod get_by_key;
            pub mod list;
            pub mod seed;
            pub mod update;
        }
    }
}
