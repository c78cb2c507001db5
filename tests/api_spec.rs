use axum::http::StatusCode;
use axum_test::TestServer;
use linkhub::api::{create_router, AppState, ServerConfig};
use linkhub::directory::content;
use linkhub::models::Section;
use linkhub::routes::{NavLink, RouteTable};

fn setup() -> TestServer {
    let directory = content::load().expect("shipped content must load");
    let routes = RouteTable::standard();
    routes.validate(&directory).expect("routes must validate");

    let config = ServerConfig {
        base_url: "https://linkhub.test".to_string(),
    };
    let app = create_router(AppState::new(directory, routes, config));
    TestServer::new(app).expect("Failed to create test server")
}

mod sections {
    use super::*;

    #[tokio::test]
    async fn lists_all_sections_in_registration_order() {
        let server = setup();

        let response = server.get("/api/v1/sections").await;

        response.assert_status_ok();
        let sections: Vec<Section> = response.json();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].slug, "official-resources");
        assert_eq!(sections.last().unwrap().slug, "guides");
    }

    #[tokio::test]
    async fn returns_section_by_slug() {
        let server = setup();

        let response = server.get("/api/v1/sections/community").await;

        response.assert_status_ok();
        let section: Section = response.json();
        assert_eq!(section.slug, "community");
        assert!(!section.groups.is_empty());
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let server = setup();

        let response = server.get("/api/v1/sections/nonexistent-slug").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn nav_links_cover_every_route_in_order() {
        let server = setup();

        let response = server.get("/api/v1/nav").await;

        response.assert_status_ok();
        let links: Vec<NavLink> = response.json();
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/",
                "/official-resources",
                "/community",
                "/integrations",
                "/applications",
                "/education",
                "/guides",
            ]
        );
        assert_eq!(links[0].label, "Home");
        assert_eq!(links[1].label, "Official Resources");
    }

    #[tokio::test]
    async fn routes_endpoint_returns_the_static_table() {
        let server = setup();

        let response = server.get("/api/v1/routes").await;

        response.assert_status_ok();
        let routes: Vec<String> = response.json();
        assert_eq!(routes[0], "/");
        assert_eq!(routes.len(), 7);
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn landing_page_lists_every_section() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<a href=\"/official-resources\">Official Resources</a>"));
        assert!(html.contains("<a href=\"/guides\">Guides</a>"));
    }

    #[tokio::test]
    async fn listing_page_renders_groups_and_items() {
        let server = setup();

        let response = server.get("/official-resources").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1>Official Resources</h1>"));
        assert!(html.contains("<h2>Documentation</h2>"));
        assert!(html.contains("https://docs.linkhub.dev/guide"));
        assert!(html.contains("target=\"_blank\""));
    }

    #[tokio::test]
    async fn unknown_slug_renders_an_empty_page_not_an_error() {
        let server = setup();

        let response = server.get("/nonexistent-slug").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<main>\n</main>"));
        // navigation header is still present
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }
}

mod sitemap {
    use super::*;

    #[tokio::test]
    async fn one_loc_per_static_route_under_the_base_url() {
        let server = setup();

        let response = server.get("/sitemap.xml").await;

        response.assert_status_ok();
        let xml = response.text();
        assert_eq!(xml.matches("<url>").count(), 7);
        assert!(xml.contains("<loc>https://linkhub.test/official-resources</loc>"));
        assert!(xml.contains("<loc>https://linkhub.test/</loc>"));
        assert!(xml.contains("<lastmod>"));
    }

    #[tokio::test]
    async fn served_as_xml() {
        let server = setup();

        let response = server.get("/sitemap.xml").await;

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/xml");
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
