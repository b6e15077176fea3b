use crate::common::{TestApp, hosted_url, routes};

mod deletion {
    use super::*;

    #[tokio::test]
    async fn removes_image_folder_principal_and_record() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;

        let principal = app
            .insert_principal("ann@example.com", "customer-pass", "customer")
            .await;
        let image = "customerImage/C1/photo.png";
        app.put_blob(image).await;
        app.put_blob("customerImage/C1/gallery/1.png").await;
        app.insert_customer("C1", "Ann", Some(&principal), Some(&hosted_url(image)))
            .await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["success"], true);
        assert_eq!(res.body["message"], "Customer deleted successfully");
        assert!(!app.customer_exists("C1").await);
        assert!(!app.principal_exists(&principal).await);
        assert!(!app.blob_exists(image).await);
        assert!(!app.blob_exists("customerImage/C1/gallery/1.png").await);
    }

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.insert_customer("C1", "Ann", None, None).await;

        let first = app.delete_with_token(&routes::customer("C1"), &token).await;
        let second = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(first.status, 200, "{}", first.text);
        assert_eq!(second.status, 404);
        assert_eq!(second.body["code"], "NOT_FOUND");
        assert_eq!(second.body["error"], "Customer not found");
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found_and_touches_nothing() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.put_blob("customerImage/C404/photo.png").await;

        let res = app
            .delete_with_token(&routes::customer("C404"), &token)
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Customer not found");
        assert!(app.blob_exists("customerImage/C404/photo.png").await);
    }

    #[tokio::test]
    async fn missing_id_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;

        let res = app.delete_with_token(routes::CUSTOMERS, &token).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["error"], "Customer ID missing");
    }

    #[tokio::test]
    async fn blank_id_is_treated_as_missing() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;

        let res = app.delete_with_token(&routes::customer("%20"), &token).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Customer ID missing");
    }

    #[tokio::test]
    async fn path_like_id_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;

        // Decodes to `C1\C2`.
        let res = app
            .delete_with_token(&routes::customer("C1%5CC2"), &token)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn external_image_url_is_left_alone() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.insert_customer("C1", "Ann", None, Some("https://cdn.example.com/o/ann.png"))
            .await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(!app.customer_exists("C1").await);
    }

    #[tokio::test]
    async fn sibling_folders_survive() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.put_blob("customerImage/C1/a.png").await;
        app.put_blob("customerImage/C10/a.png").await;
        app.insert_customer("C1", "Ann", None, None).await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(!app.blob_exists("customerImage/C1/a.png").await);
        assert!(app.blob_exists("customerImage/C10/a.png").await);
    }

    #[tokio::test]
    async fn already_missing_principal_and_image_do_not_fail_the_delete() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.insert_customer(
            "C1",
            "Ann",
            Some("principal-that-was-never-created"),
            Some(&hosted_url("customerImage/C1/gone.png")),
        )
        .await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(!app.customer_exists("C1").await);
    }

    #[tokio::test]
    async fn missing_object_storage_is_a_configuration_error() {
        let app = TestApp::spawn_without_blob_store().await;
        let token = app.admin_token().await;
        app.insert_customer("C1", "Ann", None, None).await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "CONFIGURATION_ERROR");
        assert!(app.customer_exists("C1").await);
    }

    #[tokio::test]
    async fn configuration_error_wins_over_missing_id() {
        let app = TestApp::spawn_without_blob_store().await;
        let token = app.admin_token().await;

        let res = app.delete_with_token(routes::CUSTOMERS, &token).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn requires_delete_permission() {
        let app = TestApp::spawn().await;
        let token = app.token_with_role("manager@example.com", "manager").await;
        app.insert_customer("C1", "Ann", None, None).await;

        let res = app.delete_with_token(&routes::customer("C1"), &token).await;

        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");
        assert!(app.customer_exists("C1").await);
    }

    #[tokio::test]
    async fn requires_a_token() {
        let app = TestApp::spawn().await;

        let res = app.delete_without_token(&routes::customer("C1")).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn paginates_and_searches() {
        let app = TestApp::spawn().await;
        let token = app.token_with_role("manager@example.com", "manager").await;
        app.insert_customer("C1", "Ann Lee", None, None).await;
        app.insert_customer("C2", "Bob Stone", None, None).await;
        app.insert_customer("C3", "Annika Berg", None, None).await;

        let page = app
            .get_with_token(&format!("{}?per_page=2", routes::CUSTOMERS), &token)
            .await;
        assert_eq!(page.status, 200, "{}", page.text);
        assert_eq!(page.body["data"].as_array().unwrap().len(), 2);
        assert_eq!(page.body["pagination"]["total"], 3);
        assert_eq!(page.body["pagination"]["total_pages"], 2);

        let search = app
            .get_with_token(&format!("{}?search=ANN", routes::CUSTOMERS), &token)
            .await;
        assert_eq!(search.status, 200);
        let mut ids: Vec<&str> = search.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["C1", "C3"]);
    }

    #[tokio::test]
    async fn out_of_range_page_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;

        let res = app
            .get_with_token(
                &format!("{}?page={}", routes::CUSTOMERS, u64::MAX),
                &token,
            )
            .await;

        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn like_wildcards_in_search_are_literal() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.insert_customer("C1", "Ann", None, None).await;

        let res = app
            .get_with_token(&format!("{}?search=%25", routes::CUSTOMERS), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["pagination"]["total"], 0);
    }

    #[tokio::test]
    async fn get_returns_one_customer_or_not_found() {
        let app = TestApp::spawn().await;
        let token = app.admin_token().await;
        app.insert_customer("C1", "Ann", None, None).await;

        let found = app.get_with_token(&routes::customer("C1"), &token).await;
        assert_eq!(found.status, 200);
        assert_eq!(found.body["name"], "Ann");

        let missing = app.get_with_token(&routes::customer("C9"), &token).await;
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body["error"], "Customer not found");
    }

    #[tokio::test]
    async fn customer_role_cannot_list() {
        let app = TestApp::spawn().await;
        let token = app.token_with_role("c@example.com", "customer").await;

        let res = app.get_with_token(routes::CUSTOMERS, &token).await;

        assert_eq!(res.status, 403);
    }
}
