//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, error_code, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.anonymous().get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .anonymous()
        .get("/health/ready")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let client = server.anonymous();
    let response = client.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.total_likes, 0);

    // Registration set a session cookie; the same client is now authenticated
    let response = client.get("/api/v1/users/@me").await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let first = server.anonymous();
    first.post("/api/v1/auth/register", &request).await.unwrap();

    let second = server.anonymous();
    let response = second.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .anonymous()
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Fresh client: no cookie until login
    let client = server.anonymous();
    let login_req = LoginRequest::from_register(&register_req);
    let response = client.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .anonymous()
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server
        .anonymous()
        .post("/api/v1/auth/login", &login_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_requires_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.anonymous().get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, _) = server.register_user().await.unwrap();

    let response = user.post_empty("/api/v1/auth/logout").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = user.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_posts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _) = server.register_user().await.unwrap();
    let (bob, _) = server.register_user().await.unwrap();

    let request = CreatePostRequest::image();
    let response = alice.post("/api/v1/posts", &request).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.media_type, "image");
    assert_eq!(post.like_count, 0);

    // Own feed contains the post
    let response = alice.get("/api/v1/posts/@me").await.unwrap();
    let own: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(own.iter().any(|p| p.id == post.id));

    // Alice's explore feed excludes her own post; Bob's contains it
    let response = alice.get("/api/v1/posts/explore").await.unwrap();
    let explore: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(explore.iter().all(|p| p.id != post.id));

    let response = bob.get("/api/v1/posts/explore").await.unwrap();
    let explore: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(explore.iter().any(|p| p.id == post.id));
}

#[tokio::test]
async fn test_save_post_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = server.register_user().await.unwrap();
    let (reader, _) = server.register_user().await.unwrap();

    let response = author
        .post("/api/v1/posts", &CreatePostRequest::image())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Save, then the saved feed contains the post
    let save_path = format!("/api/v1/posts/{}/save", post.id);
    let response = reader.post_empty(&save_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = reader.get("/api/v1/posts/saved").await.unwrap();
    let saved: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(saved.iter().any(|p| p.id == post.id));

    // Saving twice is a conflict
    let response = reader.post_empty(&save_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(response).await.unwrap(), "ALREADY_SAVED");

    // Saving a missing post reports the post
    let response = reader.post_empty("/api/v1/posts/0/save").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(response).await.unwrap(), "UNKNOWN_POST");

    // The author saved nothing
    let response = author.get("/api/v1/posts/saved").await.unwrap();
    let saved: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(saved.is_empty());
}

#[tokio::test]
async fn test_invalid_media_type_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, _) = server.register_user().await.unwrap();

    let request = CreatePostRequest {
        media_type: "audio".to_string(),
        content_url: "https://cdn.example.com/a.mp3".to_string(),
        category: None,
    };
    let response = user.post("/api/v1/posts", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_dislike_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = server.register_user().await.unwrap();
    let (fan, _) = server.register_user().await.unwrap();

    let response = author
        .post("/api/v1/posts", &CreatePostRequest::image())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let like_path = format!("/api/v1/posts/{}/like", post.id);
    let dislike_path = format!("/api/v1/posts/{}/dislike", post.id);

    // First like: 0 -> 1
    let response = fan.post_empty(&like_path).await.unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reaction.like_count, 1);
    assert_eq!(reaction.author_total_likes, 1);

    // Repeat like: conflict, count unchanged
    let response = fan.post_empty(&like_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(response).await.unwrap(), "ALREADY_LIKED");

    // Flip to dislike: 1 -> -1
    let response = fan.post_empty(&dislike_path).await.unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reaction.like_count, -1);
    assert_eq!(reaction.author_total_likes, -1);

    // Repeat dislike: conflict
    let response = fan.post_empty(&dislike_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(response).await.unwrap(), "ALREADY_DISLIKED");

    // The author's stats reflect the settled aggregate
    let response = author.get("/api/v1/users/@me/stats").await.unwrap();
    let stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_likes, -1);
    assert_eq!(stats.post_count, 1);
}

#[tokio::test]
async fn test_reaction_on_missing_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, _) = server.register_user().await.unwrap();

    let response = user.post_empty("/api/v1/posts/999999999/like").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(response).await.unwrap(), "UNKNOWN_POST");
}

// ============================================================================
// Poll Tests
// ============================================================================

#[tokio::test]
async fn test_create_poll_and_vote() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, owner_info) = server.register_user().await.unwrap();
    let (voter, _) = server.register_user().await.unwrap();

    let response = owner
        .post("/api/v1/polls", &CreatePollRequest::two_options())
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(poll.options.len(), 2);
    assert_eq!(poll.total_votes, 0);
    assert_eq!(poll.username, owner_info.username);

    // Vote the first option
    let vote_path = format!(
        "/api/v1/polls/{}/options/{}/vote",
        poll.id, poll.options[0].id
    );
    let response = voter.post_empty(&vote_path).await.unwrap();
    let updated: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.options[0].vote_count, 1);
    assert_eq!(updated.options[1].vote_count, 0);
    assert_eq!(updated.total_votes, 1);
    // The vote result names the poll owner, not the voter.
    assert_eq!(updated.username, owner_info.username);

    // A second vote by the same voter fails, even on the other option
    let other_path = format!(
        "/api/v1/polls/{}/options/{}/vote",
        poll.id, poll.options[1].id
    );
    let response = voter.post_empty(&other_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(error_code(response).await.unwrap(), "ALREADY_VOTED");

    // Counts unchanged after the rejected vote
    let response = voter
        .get(&format!("/api/v1/polls/{}", poll.id))
        .await
        .unwrap();
    let fetched: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.options[0].vote_count, 1);
    assert_eq!(fetched.options[1].vote_count, 0);
}

#[tokio::test]
async fn test_vote_with_foreign_option_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.register_user().await.unwrap();

    let response = owner
        .post("/api/v1/polls", &CreatePollRequest::two_options())
        .await
        .unwrap();
    let poll_a: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = owner
        .post("/api/v1/polls", &CreatePollRequest::two_options())
        .await
        .unwrap();
    let poll_b: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Option from poll B voted against poll A
    let path = format!(
        "/api/v1/polls/{}/options/{}/vote",
        poll_a.id, poll_b.options[0].id
    );
    let response = owner.post_empty(&path).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await.unwrap(), "INVALID_POLL_OPTION");
}

#[tokio::test]
async fn test_poll_with_duplicate_options_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.register_user().await.unwrap();

    let request = CreatePollRequest {
        title: "Dup".to_string(),
        options: vec!["Same".to_string(), "Same".to_string()],
    };
    let response = owner.post("/api/v1/polls", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_two_voters_both_counted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = server.register_user().await.unwrap();
    let (voter_a, _) = server.register_user().await.unwrap();
    let (voter_b, _) = server.register_user().await.unwrap();

    let response = owner
        .post("/api/v1/polls", &CreatePollRequest::two_options())
        .await
        .unwrap();
    let poll: PollResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!(
        "/api/v1/polls/{}/options/{}/vote",
        poll.id, poll.options[0].id
    );

    // Concurrent votes by distinct users on the same option
    let (ra, rb) = tokio::join!(voter_a.post_empty(&path), voter_b.post_empty(&path));
    assert_eq!(ra.unwrap().status(), StatusCode::OK);
    assert_eq!(rb.unwrap().status(), StatusCode::OK);

    let response = owner
        .get(&format!("/api/v1/polls/{}", poll.id))
        .await
        .unwrap();
    let fetched: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.options[0].vote_count, 2);
    assert_eq!(fetched.total_votes, 2);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = server.register_user().await.unwrap();
    let (commenter, commenter_reg) = server.register_user().await.unwrap();

    let response = author
        .post("/api/v1/posts", &CreatePostRequest::image())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let comments_path = format!("/api/v1/posts/{}/comments", post.id);
    let request = CreateCommentRequest {
        text: "Great shot".to_string(),
    };
    let response = commenter.post(&comments_path, &request).await.unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.username, commenter_reg.username);
    assert_eq!(comment.text, "Great shot");

    // Listed on the post with commenter username
    let response = author.get(&comments_path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.iter().any(|c| c.id == comment.id));

    // And in the commenter's own comment list
    let response = commenter.get("/api/v1/users/@me/comments").await.unwrap();
    let own: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(own.iter().any(|c| c.id == comment.id));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_and_public_view() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, _) = server.register_user().await.unwrap();
    let (viewer, _) = server.register_user().await.unwrap();

    let new_username = format!("renamed{}", unique_suffix());
    let response = user
        .patch(
            "/api/v1/users/@me",
            &serde_json::json!({ "username": new_username }),
        )
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, new_username);

    let response = viewer
        .get(&format!("/api/v1/users/{}", me.id))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.user.username, new_username);
    assert_eq!(profile.post_count, 0);
}
