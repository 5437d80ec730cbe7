use actix_web::{
    http::{header::ContentType, StatusCode},
    web, HttpResponse, ResponseError,
};

use crate::models::{ApiResponse, CreateUserRequest, UpdateUserRequest};
use crate::services::UpstreamClient;
use crate::utils::AppError;

/// Devolve o corpo do upstream como veio, ou o envelope de erro traduzido
fn relay(op: &str, result: Result<Vec<u8>, AppError>, success: StatusCode) -> HttpResponse {
    match result {
        Ok(body) => {
            log::info!("✅ Upstream {} succeeded", op);
            HttpResponse::build(success)
                .content_type(ContentType::json())
                .body(body)
        }
        Err(e) => {
            log::warn!("❌ Upstream {} failed: {}", op, e);
            e.error_response()
        }
    }
}

/// GET /api/remote/users - Lista usuários do serviço upstream
#[utoipa::path(
    get,
    path = "/api/remote/users",
    tag = "Remote Users",
    responses(
        (status = 200, description = "Upstream body relayed unchanged"),
        (status = 404, description = "No user data found", body = ApiResponse),
        (status = 500, description = "Upstream returned an error", body = ApiResponse),
        (status = 503, description = "Upstream unreachable", body = ApiResponse)
    )
)]
pub async fn list_remote_users(upstream: web::Data<UpstreamClient>) -> HttpResponse {
    log::info!("🌐 GET /api/remote/users");
    relay("list", upstream.list_users().await, StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/remote/users/{id}",
    tag = "Remote Users",
    params(("id" = u64, Path, description = "Upstream user id")),
    responses(
        (status = 200, description = "Upstream body relayed unchanged"),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Upstream returned an error", body = ApiResponse),
        (status = 503, description = "Upstream unreachable", body = ApiResponse)
    )
)]
pub async fn get_remote_user(
    upstream: web::Data<UpstreamClient>,
    id: web::Path<u64>,
) -> HttpResponse {
    let id = id.into_inner();
    log::info!("🌐 GET /api/remote/users/{}", id);
    relay("get", upstream.get_user(id).await, StatusCode::OK)
}

/// POST /api/remote/users - Cria usuário no upstream (400 do upstream volta como 400)
#[utoipa::path(
    post,
    path = "/api/remote/users",
    tag = "Remote Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Upstream body relayed unchanged"),
        (status = 400, description = "Validation failed, locally or upstream", body = ApiResponse),
        (status = 500, description = "Upstream returned an error", body = ApiResponse),
        (status = 503, description = "Upstream unreachable", body = ApiResponse)
    )
)]
pub async fn create_remote_user(
    upstream: web::Data<UpstreamClient>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    log::info!("🌐 POST /api/remote/users - email: {}", request.email);

    if let Err(e) = request.validate() {
        log::warn!("❌ Rejected before upstream: {}", e);
        return e.error_response();
    }

    relay("create", upstream.create_user(&request).await, StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/api/remote/users/{id}",
    tag = "Remote Users",
    params(("id" = u64, Path, description = "Upstream user id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Upstream body relayed unchanged"),
        (status = 400, description = "Validation failed, locally or upstream", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Upstream returned an error", body = ApiResponse),
        (status = 503, description = "Upstream unreachable", body = ApiResponse)
    )
)]
pub async fn update_remote_user(
    upstream: web::Data<UpstreamClient>,
    id: web::Path<u64>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    let id = id.into_inner();
    log::info!("🌐 PUT /api/remote/users/{}", id);

    if let Err(e) = request.validate() {
        log::warn!("❌ Rejected before upstream: {}", e);
        return e.error_response();
    }

    relay("update", upstream.update_user(id, &request).await, StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/remote/users/{id}",
    tag = "Remote Users",
    params(("id" = u64, Path, description = "Upstream user id")),
    responses(
        (status = 200, description = "Upstream envelope relayed unchanged", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Upstream returned an error", body = ApiResponse),
        (status = 503, description = "Upstream unreachable", body = ApiResponse)
    )
)]
pub async fn delete_remote_user(
    upstream: web::Data<UpstreamClient>,
    id: web::Path<u64>,
) -> HttpResponse {
    let id = id.into_inner();
    log::info!("🌐 DELETE /api/remote/users/{}", id);
    relay("delete", upstream.delete_user(id).await, StatusCode::OK)
}
