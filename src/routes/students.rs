use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::{
    common::DeleteConfirmParams,
    students::requests::{StudentForm, StudentIndexParams},
};
use crate::services::StudentService;
use crate::utils::SafeIdI64;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentIndexParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, query.into_inner())
        .await
}

pub async fn get_student_details(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student_details(&req, id.0).await
}

pub async fn create_student_form() -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student_form().await
}

pub async fn create_student(
    req: HttpRequest,
    form: web::Form<StudentForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, form.into_inner())
        .await
}

pub async fn edit_student_form(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.edit_student_form(&req, id.0).await
}

pub async fn edit_student(
    req: HttpRequest,
    id: SafeIdI64,
    form: web::Form<StudentForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .edit_student(&req, id.0, form.into_inner())
        .await
}

pub async fn delete_student_confirm(
    req: HttpRequest,
    id: SafeIdI64,
    query: web::Query<DeleteConfirmParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_student_confirm(&req, id.0, query.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/Students")
            .service(web::resource("").route(web::get().to(list_students)))
            .service(web::resource("/Index").route(web::get().to(list_students)))
            .service(web::resource("/Details/{id}").route(web::get().to(get_student_details)))
            .service(
                web::resource("/Create")
                    .route(web::get().to(create_student_form))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/Edit/{id}")
                    .route(web::get().to(edit_student_form))
                    .route(web::post().to(edit_student)),
            )
            .service(
                web::resource("/Delete/{id}")
                    .route(web::get().to(delete_student_confirm))
                    .route(web::post().to(delete_student)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::{StatusCode, header},
        test,
    };
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::models::students::{entities::Student, requests::StudentChanges};
    use crate::storage::{Storage, create_test_storage};

    async fn seed_students(storage: &Arc<dyn Storage>) -> Vec<Student> {
        let mut students = Vec::new();
        for (last, first, date) in [
            ("Alexander", "Carson", "2010-09-01"),
            ("Alonso", "Meredith", "2012-09-01"),
            ("Anand", "Arturo", "2013-09-01"),
            ("Barzdukas", "Gytis", "2012-09-01"),
            ("Li", "Yan", "2012-09-01"),
            ("Justice", "Peggy", "2011-09-01"),
            ("Norman", "Laura", "2013-09-01"),
        ] {
            let student = storage
                .create_student(StudentChanges {
                    last_name: last.to_string(),
                    first_mid_name: first.to_string(),
                    enrollment_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                })
                .await
                .unwrap();
            students.push(student);
        }
        students
    }

    fn last_names(body: &Value) -> Vec<String> {
        body["data"]["students"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["last_name"].as_str().unwrap().to_string())
            .collect()
    }

    fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[actix_web::test]
    async fn test_index_pages_and_clamps() {
        let storage = create_test_storage().await;
        seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get().uri("/Students").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(last_names(&body), vec!["Alexander", "Alonso", "Anand"]);
        assert_eq!(body["data"]["students"]["total_pages"], 3);
        assert_eq!(body["data"]["name_sort_parm"], "name_desc");
        assert_eq!(body["data"]["date_sort_parm"], "Date");

        let req = test::TestRequest::get()
            .uri("/Students?pageNumber=3")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(last_names(&body), vec!["Norman"]);
        assert_eq!(body["data"]["students"]["has_next_page"], false);

        // 越界页码收敛到最后一页，非正数收敛到第一页
        let req = test::TestRequest::get()
            .uri("/Students?pageNumber=9")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["students"]["page_index"], 3);

        let req = test::TestRequest::get()
            .uri("/Students?pageNumber=0")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["students"]["page_index"], 1);
    }

    #[actix_web::test]
    async fn test_index_sorting() {
        let storage = create_test_storage().await;
        seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students?sortOrder=name_desc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(last_names(&body), vec!["Norman", "Li", "Justice"]);
        assert_eq!(body["data"]["name_sort_parm"], "");
        assert_eq!(body["data"]["current_sort"], "name_desc");

        let req = test::TestRequest::get()
            .uri("/Students?sortOrder=Date")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(last_names(&body), vec!["Alexander", "Justice", "Alonso"]);
        assert_eq!(body["data"]["date_sort_parm"], "date_desc");

        // 未知排序标记按姓升序处理
        let req = test::TestRequest::get()
            .uri("/Students?sortOrder=DROP%20TABLE")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(last_names(&body), vec!["Alexander", "Alonso", "Anand"]);
    }

    #[actix_web::test]
    async fn test_new_search_resets_page() {
        let storage = create_test_storage().await;
        seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students?searchString=an&pageNumber=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["students"]["page_index"], 1);
        assert_eq!(body["data"]["students"]["total_items"], 4);
        assert_eq!(body["data"]["current_filter"], "an");

        // 沿用 currentFilter 翻页
        let req = test::TestRequest::get()
            .uri("/Students?currentFilter=an&pageNumber=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["students"]["page_index"], 2);
        assert_eq!(last_names(&body), vec!["Norman"]);
    }

    #[actix_web::test]
    async fn test_empty_query_values_are_ignored() {
        let storage = create_test_storage().await;
        seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students?sortOrder=&currentFilter=&searchString=&pageNumber=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["students"]["page_index"], 1);
        assert_eq!(body["data"]["students"]["total_items"], 7);
        assert_eq!(body["data"]["current_filter"], "");
        assert_eq!(body["data"]["name_sort_parm"], "name_desc");
        assert_eq!(last_names(&body), vec!["Alexander", "Alonso", "Anand"]);
    }

    #[actix_web::test]
    async fn test_empty_search_keeps_current_filter() {
        let storage = create_test_storage().await;
        seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students?sortOrder=Date&currentFilter=an&searchString=&pageNumber=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["current_filter"], "an");
        assert_eq!(body["data"]["students"]["page_index"], 2);
        assert_eq!(body["data"]["students"]["total_items"], 4);
    }

    #[actix_web::test]
    async fn test_invalid_page_number_is_bad_request() {
        let storage = create_test_storage().await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students?pageNumber=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_details() {
        let storage = create_test_storage().await;
        let students = seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri(&format!("/Students/Details/{}", students[0].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["last_name"], "Alexander");
        assert!(body["data"]["enrollments"].as_array().unwrap().is_empty());

        for uri in ["/Students/Details/999", "/Students/Details/abc", "/Students/Details"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_create_redirects_on_success() {
        let storage = create_test_storage().await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::post()
            .uri("/Students/Create")
            .set_form([
                ("last_name", "Olivetto"),
                ("first_mid_name", "Nino"),
                ("enrollment_date", "2005-09-01"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/Students");
        assert_eq!(storage.count_students().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_create_invalid_redisplays_form() {
        let storage = create_test_storage().await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::post()
            .uri("/Students/Create")
            .set_form([
                ("last_name", ""),
                ("first_mid_name", "Nino"),
                ("enrollment_date", "2005-09-01"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["student"]["first_mid_name"], "Nino");
        assert_eq!(body["data"]["errors"][0]["field"], "last_name");
        assert_eq!(storage.count_students().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_edit_ignores_posted_id() {
        let storage = create_test_storage().await;
        let students = seed_students(&storage).await;
        let target = &students[1];
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::post()
            .uri(&format!("/Students/Edit/{}", target.id))
            .set_form([
                ("id", "999"),
                ("last_name", "Alonso-Smith"),
                ("first_mid_name", "Meredith"),
                ("enrollment_date", "2012-09-01"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let updated = storage.get_student_by_id(target.id).await.unwrap().unwrap();
        assert_eq!(updated.last_name, "Alonso-Smith");
        assert!(storage.get_student_by_id(999).await.unwrap().is_none());
        assert_eq!(storage.count_students().await.unwrap(), 7);
    }

    #[actix_web::test]
    async fn test_edit_missing_and_invalid() {
        let storage = create_test_storage().await;
        let students = seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri("/Students/Edit/999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri(&format!("/Students/Edit/{}", students[0].id))
            .set_form([
                ("last_name", "Alexander"),
                ("first_mid_name", "Carson"),
                ("enrollment_date", "not-a-date"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], students[0].id);
        assert_eq!(body["data"]["student"]["enrollment_date"], "not-a-date");

        let unchanged = storage
            .get_student_by_id(students[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged, students[0]);
    }

    #[actix_web::test]
    async fn test_delete_flow() {
        let storage = create_test_storage().await;
        let students = seed_students(&storage).await;
        let app = init_test_app!(storage, configure_students_routes);

        let req = test::TestRequest::get()
            .uri(&format!(
                "/Students/Delete/{}?saveChangesError=true",
                students[0].id
            ))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(
            body["data"]["error_message"]
                .as_str()
                .unwrap()
                .starts_with("Delete failed")
        );

        for uri in [
            format!("/Students/Delete/{}", students[0].id),
            format!("/Students/Delete/{}?saveChangesError=", students[0].id),
        ] {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert!(body["data"]["error_message"].is_null());
        }

        let req = test::TestRequest::post()
            .uri(&format!("/Students/Delete/{}", students[0].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/Students");
        assert!(
            storage
                .get_student_by_id(students[0].id)
                .await
                .unwrap()
                .is_none()
        );

        // 重复删除同样回到列表页
        let req = test::TestRequest::post()
            .uri(&format!("/Students/Delete/{}", students[0].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/Students");
        assert_eq!(storage.count_students().await.unwrap(), 6);
    }
}
