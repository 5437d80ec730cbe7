use crate::database::UserStore;
use crate::models::CreateUserRequest;

/// Usuários de demonstração (SEED_DEMO_USERS=true), só se o store estiver vazio
pub async fn seed_demo_users(store: &UserStore) {
    let count = store.len().await;
    if count > 0 {
        log::info!("👥 Demo users: store already has {} users — skipping seed", count);
        return;
    }

    let users = build_demo_users();
    log::info!("👥 Demo users: seeding {} users...", users.len());

    for user in &users {
        match store.insert(user).await {
            Ok(created) => log::info!("   ✅ Seeded user {} ({})", created.id, created.email),
            Err(e) => log::warn!("   ⚠️  Failed to seed {}: {}", user.email, e),
        }
    }
}

fn build_demo_users() -> Vec<CreateUserRequest> {
    vec![
        CreateUserRequest {
            name: "Demo User".into(),
            email: "demo@example.com".into(),
            password: "demo123456".into(),
        },
        CreateUserRequest {
            name: "Test User".into(),
            email: "test@example.com".into(),
            password: "test123456".into(),
        },
    ]
}
