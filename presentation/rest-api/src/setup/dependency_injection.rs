use std::sync::Arc;

use logger::{TracingLogger, TracingNotifier};
use mock_backend::{MockIdentityProvider, MockOrderGateway};
use openai::client::OpenAIClient;
use openai::recommendation_ranker::RecommendationRankerOpenAI;
use persistence::cart::repository::CartRepositoryLocal;
use persistence::catalog::repository::CatalogRepositoryStatic;
use persistence::history::repository::HistoryRepositoryLocal;
use persistence::local_store::LocalStore;
use persistence::order::repository::OrderRepositoryLocal;
use persistence::session::repository::SessionRepositoryLocal;

use business::application::auth::current_session::CurrentSessionUseCaseImpl;
use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::signup::SignupUseCaseImpl;
use business::application::auth::update_profile::UpdateProfileUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::get_all::GetProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::history::get_history::GetHistoryUseCaseImpl;
use business::application::history::record_view::RecordViewUseCaseImpl;
use business::application::order::get_orders::GetOrdersUseCaseImpl;
use business::application::order::place_order::PlaceOrderUseCaseImpl;
use business::application::recommendation::get_recommendations::GetRecommendationsUseCaseImpl;

use crate::config::mock_config::MockBackendConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::config::store_config::StoreConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(TracingNotifier);
        let health_api = crate::api::health::routes::Api::new();

        // Session-local persistence, one store per server session
        let store_config = StoreConfig::from_env();
        let store = match store_config.path {
            Some(path) => LocalStore::open(path),
            None => LocalStore::in_memory(),
        };

        let catalog_repository = Arc::new(CatalogRepositoryStatic::new()?);
        let cart_repository = Arc::new(CartRepositoryLocal::new(store.clone()));
        let session_repository = Arc::new(SessionRepositoryLocal::new(store.clone()));
        let history_repository = Arc::new(HistoryRepositoryLocal::new(store.clone()));
        let order_repository = Arc::new(OrderRepositoryLocal::new(store));

        // AI ranking service and mocked backends
        let openai_config = OpenAIConfig::from_env();
        let ranker = Arc::new(RecommendationRankerOpenAI::new(OpenAIClient::new(
            openai_config.api_key,
        )));

        let mock_config = MockBackendConfig::from_env();
        let identity_provider = Arc::new(MockIdentityProvider::new(mock_config.auth_delay));
        let order_gateway = Arc::new(MockOrderGateway::new(mock_config.checkout_delay));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: catalog_repository.clone(),
        });

        // Cart use cases
        let get_cart_items_use_case = Arc::new(GetCartItemsUseCaseImpl {
            repository: cart_repository.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
        });

        // Auth use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            identity_provider: identity_provider.clone(),
            session_repository: session_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let signup_use_case = Arc::new(SignupUseCaseImpl {
            identity_provider,
            session_repository: session_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            session_repository: session_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let current_session_use_case = Arc::new(CurrentSessionUseCaseImpl {
            session_repository: session_repository.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            session_repository,
            notifier,
            logger: logger.clone(),
        });

        // History use cases
        let record_view_use_case = Arc::new(RecordViewUseCaseImpl {
            repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let get_history_use_case = Arc::new(GetHistoryUseCaseImpl {
            repository: history_repository,
        });

        // Recommendation orchestrator
        let get_recommendations_use_case = Arc::new(GetRecommendationsUseCaseImpl::new(
            catalog_repository,
            ranker,
            logger.clone(),
        ));

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            gateway: order_gateway,
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_products_use_case,
            get_product_by_id_use_case.clone(),
            get_categories_use_case,
            record_view_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_items_use_case.clone(),
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case.clone(),
            get_product_by_id_use_case.clone(),
            current_session_use_case.clone(),
        );

        let auth_api = crate::api::auth::routes::AuthApi::new(
            login_use_case,
            signup_use_case,
            logout_use_case,
            current_session_use_case.clone(),
            update_profile_use_case,
        );

        let recommendation_api = crate::api::recommendation::routes::RecommendationApi::new(
            get_history_use_case,
            get_recommendations_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            place_order_use_case,
            get_orders_use_case,
            get_cart_items_use_case,
            clear_cart_use_case,
            get_product_by_id_use_case,
            current_session_use_case,
            order_repository,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            auth_api,
            recommendation_api,
            order_api,
        })
    }
}
