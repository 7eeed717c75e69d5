#[cfg(feature = "ssr")]
mod server {
    use app_shell::PRICE_HISTORY_PATH;
    use axum::routing::get;
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, render_app_to_stream, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;
    use ui::App;

    pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let conf = get_configuration(None).await?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        // Routing is decided inside the app from the request path, so both
        // surfaces render through the same handler.
        let app = Router::new()
            .route(
                PRICE_HISTORY_PATH,
                get(render_app_to_stream(leptos_options.clone(), App)),
            )
            .leptos_routes(&leptos_options, routes, App)
            .fallback_service(ServeDir::new(leptos_options.site_root.clone()))
            .with_state(leptos_options);

        tracing::info!(%addr, "DealFinder listening");
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
