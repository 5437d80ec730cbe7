use actix_web::{web, HttpResponse};

use crate::database::UserStore;
use crate::models::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::utils::AppError;

/// GET /api/users - Lista todos os usuários locais (ordem de inserção)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All local users, in insertion order", body = [UserResponse])
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    log::info!("👥 GET /api/users");

    let users: Vec<UserResponse> = store
        .list_all()
        .await
        .iter()
        .map(UserResponse::from)
        .collect();

    HttpResponse::Ok().json(users)
}

/// GET /api/users/{id} - Busca um usuário local
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ApiResponse)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    log::info!("👤 GET /api/users/{}", id);

    let user = store.get(id).await.inspect_err(|e| {
        log::warn!("❌ User {}: {}", id, e);
    })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed or email already registered", body = ApiResponse)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /api/users - email: {}", request.email);

    request.validate()?;
    let user = store.insert(&request).await.inspect_err(|e| {
        log::warn!("❌ Create failed for {}: {}", request.email, e);
    })?;

    log::info!("✅ User created: {}", user.id);
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed or email already registered", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    id: web::Path<u64>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    log::info!("✏️  PUT /api/users/{}", id);

    request.validate()?;
    let user = store.update(id, &request).await.inspect_err(|e| {
        log::warn!("❌ Update failed for user {}: {}", id, e);
    })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// DELETE /api/users/{id} - Remove e devolve o usuário dentro do envelope
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    log::info!("🗑️  DELETE /api/users/{}", id);

    let user = store.delete(id).await.inspect_err(|e| {
        log::warn!("❌ Delete failed for user {}: {}", id, e);
    })?;

    let data = serde_json::to_value(UserResponse::from(&user))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(true, "user deleted", Some(data))))
}
