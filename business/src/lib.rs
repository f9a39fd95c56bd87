pub mod application {
    pub mod auth {
        pub mod current_session;
        pub mod login;
        pub mod logout;
        pub mod signup;
        pub mod update_profile;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_items;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
    }
    pub mod history {
        pub mod get_history;
        pub mod record_view;
    }
    pub mod order {
        pub mod get_orders;
        pub mod place_order;
    }
    pub mod recommendation {
        pub mod get_recommendations;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod current_session;
            pub mod login;
            pub mod logout;
            pub mod signup;
            pub mod update_profile;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_items;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod history {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_history;
            pub mod record_view;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_orders;
            pub mod place_order;
        }
    }
    pub mod recommendation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_recommendations;
        }
    }
}
