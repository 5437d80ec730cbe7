use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Gateway API",
        version = "1.0.0",
        description = "User records API. \n\n**Sources:**\n- `/api/users`: in-process store\n- `/api/remote/users`: pass-through to the upstream users service\n\n**Errors:** every failure is returned as `{ success: false, message, data: null }`.",
        contact(
            name = "User Gateway Team"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Local store
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Upstream proxy
        crate::api::remote_users::list_remote_users,
        crate::api::remote_users::get_remote_user,
        crate::api::remote_users::create_remote_user,
        crate::api::remote_users::update_remote_user,
        crate::api::remote_users::delete_remote_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::ApiResponse,
            crate::models::UserResponse,
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint."),
        (name = "Users", description = "Users held by this service, in memory, for the lifetime of the process."),
        (name = "Remote Users", description = "Users owned by the upstream service. Each call is forwarded once; upstream failures are translated to the standard envelope."),
    )
)]
pub struct ApiDoc;
