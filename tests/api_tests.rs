mod common;

#[cfg(test)]
pub mod api_tests {
    use serde_json::json;
    use wiremock::matchers::{
        body_partial_json, method, path, query_param, query_param_is_missing,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use kahragen_web::api;
    use kahragen_web::common::ApiError;
    use kahragen_web::models::{ContactSubmission, JobQuery, NavLocation, ProjectQuery};

    #[tokio::test]
    async fn test_get_page_by_slug_success() {
        let server = MockServer::start().await;
        mount_data(&server, "/pages/about", seed_about_page()).await;

        let page = api::get_page_by_slug(&test_client(&server), "about")
            .await
            .expect("request failed")
            .expect("page missing");

        assert_eq!(page.title, "About Us");
        assert_eq!(page.slug, "about");
        assert!(page.published);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].tag, "paragraph");
        assert_eq!(
            page.meta_title.as_deref(),
            Some("About KahraGen | KahraGen Engineering")
        );
        assert_eq!(
            page.meta_keywords.as_deref(),
            Some(&["about".to_string(), "engineering consultancy".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_get_page_by_slug_fails_on_unknown_slug() {
        let server = MockServer::start().await;

        let page = api::get_page_by_slug(&test_client(&server), "no-such-page")
            .await
            .expect("a backend 404 maps to None, not an error");

        assert!(page.is_none());
    }

    #[tokio::test]
    async fn test_list_pages_success() {
        let server = MockServer::start().await;
        mount_data(
            &server,
            "/pages",
            json!([seed_about_page(), seed_contact_page()]),
        )
        .await;

        let pages = api::list_pages(&test_client(&server))
            .await
            .expect("request failed");

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].slug, "about");
        assert_eq!(pages[1].title, "Contact Us");
    }

    #[tokio::test]
    async fn test_get_site_settings_success() {
        let server = MockServer::start().await;
        mount_data(&server, "/site-settings", seed_site_settings()).await;

        let settings = api::get_site_settings(&test_client(&server))
            .await
            .expect("request failed")
            .expect("settings missing");

        assert_eq!(settings.site_name(), "KahraGen Engineering");
        assert_eq!(settings.contact_email.as_deref(), Some("projects@kahragen.com"));
        assert_eq!(
            settings.office_hours(),
            vec!["Sun - Thu: 8:00 AM - 6:00 PM", "Fri - Sat: Closed"]
        );
        assert_eq!(
            settings.address_lines(),
            vec!["Jumeirah Lakes Towers", "Dubai, UAE"]
        );
    }

    #[tokio::test]
    async fn test_get_site_settings_fails_on_null_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/site-settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
            .mount(&server)
            .await;

        let settings = api::get_site_settings(&test_client(&server))
            .await
            .expect("an unseeded settings record maps to None, not an error");

        assert!(settings.is_none());
    }

    #[tokio::test]
    async fn test_get_navigation_success() {
        let server = MockServer::start().await;
        mount_data(&server, "/navigation/header", seed_header_navigation()).await;

        let items = api::get_navigation(&test_client(&server), NavLocation::Header)
            .await
            .expect("request failed");

        // Raw wire order and flags survive; filtering and sorting happen in
        // the shell, not the client.
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "Company Profile");
        assert_eq!(items[1].order, 1);
        assert!(!items[2].is_active);
    }

    #[tokio::test]
    async fn test_list_project_types_success() {
        let server = MockServer::start().await;
        mount_data(&server, "/project-types", json!(["Conventional Power", "Solar", "Wind"]))
            .await;

        let types = api::list_project_types(&test_client(&server))
            .await
            .expect("request failed");

        assert_eq!(types, vec!["Conventional Power", "Solar", "Wind"]);
    }

    #[tokio::test]
    async fn test_list_projects_skips_sentinel_filters_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param_is_missing("type"))
            .and(query_param_is_missing("region"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [seed_project(
                    1,
                    "Hassyan Power Complex",
                    "hassyan-power-complex",
                    "Conventional Power",
                    "Middle East"
                )]
            })))
            .mount(&server)
            .await;

        let query = ProjectQuery {
            project_type: Some("all".to_string()),
            region: None,
            ..ProjectQuery::default()
        };
        let projects = api::list_projects(&test_client(&server), &query)
            .await
            .expect("request failed");

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_type, "Conventional Power");
        assert_eq!(projects[0].capacity, "150 MW");
    }

    #[tokio::test]
    async fn test_list_projects_featured_params_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param("is_featured", "1"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [seed_project(
                    2,
                    "Mohammed bin Rashid Solar Park",
                    "mbr-solar-park",
                    "Solar",
                    "Middle East"
                )]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let projects = api::list_projects(&test_client(&server), &ProjectQuery::featured(3))
            .await
            .expect("request failed");

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Mohammed bin Rashid Solar Park");
    }

    #[tokio::test]
    async fn test_get_project_by_slug_success() {
        let server = MockServer::start().await;
        mount_data(
            &server,
            "/projects/al-noor-solar-park",
            seed_project(3, "Al Noor Solar Park", "al-noor-solar-park", "Solar", "Middle East"),
        )
        .await;

        let project = api::get_project_by_slug(&test_client(&server), "al-noor-solar-park")
            .await
            .expect("request failed")
            .expect("project missing");

        assert_eq!(project.title, "Al Noor Solar Park");
        assert_eq!(project.region.as_deref(), Some("Middle East"));
        assert_eq!(project.details, vec!["SCADA integration", "Grid compliance studies"]);
    }

    #[tokio::test]
    async fn test_list_job_openings_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job-openings"))
            .and(query_param("department", "Electrical Engineering"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [seed_job(1, "Senior Electrical Engineer", "senior-electrical-engineer")]
            })))
            .mount(&server)
            .await;

        let query = JobQuery {
            department: Some("Electrical Engineering".to_string()),
            location: None,
        };
        let jobs = api::list_job_openings(&test_client(&server), &query)
            .await
            .expect("request failed");

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Senior Electrical Engineer");
        assert!(jobs[0].is_active);
        assert_eq!(jobs[0].requirements.as_ref().map(|r| r.len()), Some(2));
    }

    #[tokio::test]
    async fn test_get_job_opening_by_slug_fails_on_unknown_slug() {
        let server = MockServer::start().await;

        let job = api::get_job_opening_by_slug(&test_client(&server), "retired-role")
            .await
            .expect("a backend 404 maps to None, not an error");

        assert!(job.is_none());
    }

    #[tokio::test]
    async fn test_get_sector_by_slug_success() {
        let server = MockServer::start().await;
        mount_data(
            &server,
            "/sectors/power-generation",
            seed_sector(1, "Power Generation", "power-generation", "Zap"),
        )
        .await;

        let sector = api::get_sector_by_slug(&test_client(&server), "power-generation")
            .await
            .expect("request failed")
            .expect("sector missing");

        assert_eq!(sector.title, "Power Generation");
        assert_eq!(sector.icon, "Zap");
        assert_eq!(sector.features.len(), 2);
    }

    #[tokio::test]
    async fn test_get_service_by_slug_fails_on_unknown_slug() {
        let server = MockServer::start().await;

        let service = api::get_service_by_slug(&test_client(&server), "no-such-service")
            .await
            .expect("a backend 404 maps to None, not an error");

        assert!(service.is_none());
    }

    #[tokio::test]
    async fn test_list_core_values_success() {
        let server = MockServer::start().await;
        mount_data(
            &server,
            "/core-values",
            json!([
                {
                    "id": 1,
                    "title": "Integrity",
                    "description": "We hold ourselves to the highest standards.",
                    "icon_name": "ShieldCheck"
                },
                {
                    "id": 2,
                    "title": "Innovation",
                    "description": "We bring new thinking to old problems.",
                    "icon_name": null
                }
            ]),
        )
        .await;

        let values = api::list_core_values(&test_client(&server))
            .await
            .expect("request failed");

        assert_eq!(values.len(), 2);
        assert_eq!(values[0].icon_name.as_deref(), Some("ShieldCheck"));
        assert!(values[1].icon_name.is_none());
    }

    #[tokio::test]
    async fn test_list_sectors_fails_on_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sectors"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "Upstream database unavailable"
            })))
            .mount(&server)
            .await;

        let err = api::list_sectors(&test_client(&server))
            .await
            .expect_err("a 500 must surface as an error");

        match &err {
            ApiError::Backend { status, message } => {
                assert_eq!(*status, 500);
                assert_eq!(message, "Upstream database unavailable");
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_services_fails_on_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = api::list_services(&test_client(&server))
            .await
            .expect_err("a 500 must surface as an error");

        assert_eq!(err.to_string(), "API error: 500");
    }

    #[tokio::test]
    async fn test_submit_contact_form_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact-submissions"))
            .and(body_partial_json(json!({ "email": "fatima@example.com" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "id": 7, "message": "Thank you for contacting us." }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let submission = ContactSubmission {
            name: "Fatima Hassan".to_string(),
            email: "fatima@example.com".to_string(),
            subject: "Substation design inquiry".to_string(),
            message: "We are planning a 132kV substation and need a design partner.".to_string(),
        };
        let ack = api::submit_contact_form(&test_client(&server), &submission)
            .await
            .expect("request failed");

        assert_eq!(ack.as_deref(), Some("Thank you for contacting us."));
    }

    #[tokio::test]
    async fn test_submit_contact_form_envelope_message_success() {
        // The acknowledgement can also ride on the envelope itself.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact-submissions"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "id": 8 },
                "message": "Received."
            })))
            .mount(&server)
            .await;

        let submission = ContactSubmission {
            name: "Omar Khalil".to_string(),
            email: "omar@example.com".to_string(),
            subject: "Grid study request".to_string(),
            message: "Looking for a grid compliance study for a 50 MW plant.".to_string(),
        };
        let ack = api::submit_contact_form(&test_client(&server), &submission)
            .await
            .expect("request failed");

        assert_eq!(ack.as_deref(), Some("Received."));
    }

    #[tokio::test]
    async fn test_submit_contact_form_fails_on_validation_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact-submissions"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "The given data was invalid.",
                "errors": {
                    "email": [
                        "The email must be a valid email address.",
                        "The email field is required."
                    ]
                }
            })))
            .mount(&server)
            .await;

        let submission = ContactSubmission {
            name: "Fatima Hassan".to_string(),
            email: "not-an-email".to_string(),
            subject: "Substation design inquiry".to_string(),
            message: "We are planning a 132kV substation and need a design partner.".to_string(),
        };
        let err = api::submit_contact_form(&test_client(&server), &submission)
            .await
            .expect_err("a 422 must surface as an error");

        // Field errors are flattened into the message, ready for display.
        match &err {
            ApiError::Backend { status, message } => {
                assert_eq!(*status, 422);
                assert_eq!(
                    message,
                    "The email must be a valid email address. The email field is required."
                );
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "The email must be a valid email address. The email field is required."
        );
    }
}
