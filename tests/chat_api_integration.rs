//! Integration tests for the chat API.
//!
//! Each test spins up the Axum router on a random port and exercises the
//! real HTTP contract, either with raw reqwest calls or through the chat
//! widget's own HTTP backend.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use dolla::config::ServerConfig;
use dolla::conversation::{BotMessage, ConversationState};
use dolla::remote::{ChatBackend, ChatRequest, HttpChatBackend};
use dolla::server;
use dolla::widget::ChatWidget;

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start the chat API (no dictionary key) on a random port.
async fn start_server() -> u16 {
    let app = server::app(&ServerConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

async fn post_chat(port: u16, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{port}/api/chat"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.json().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn savings_reply_offers_plan_buttons() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let (status, body) = post_chat(
            port,
            json!({"message": "", "allowance": "5000", "expenses": "3000"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(
            body["reply"]
                .as_str()
                .unwrap()
                .contains("your savings are: Ksh2000.00.")
        );
        assert_eq!(body["buttons"], json!(["Yes", "No"]));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn deficit_reply_has_no_buttons() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let (status, body) = post_chat(
            port,
            json!({"message": "", "allowance": "2000", "expenses": "2500.5"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(
            body["reply"]
                .as_str()
                .unwrap()
                .contains("You have a deficit of Ksh500.50.")
        );
        assert!(body.get("buttons").is_none());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn message_priority_chain() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (_, body) = post_chat(port, json!({"message": "hello"})).await;
        assert_eq!(body["reply"], server::responder::GREETING);

        let (_, body) = post_chat(port, json!({"message": "(2 + 3) * 4"})).await;
        assert_eq!(body["reply"], "20");

        let (_, body) = post_chat(port, json!({"message": "What is a budget?"})).await;
        let reply = body["reply"].as_str().unwrap();
        assert!(reply.starts_with("A budget is a plan for your money."));
        assert!(reply.ends_with("I hope you learned 😊"));

        let (_, body) = post_chat(port, json!({"message": "tell me about crypto"})).await;
        assert_eq!(body["reply"], server::responder::FALLBACK);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn hostile_input_gets_a_reply() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let max = "79228162514264337593543950335";

        let (status, body) = post_chat(
            port,
            json!({"message": "", "allowance": max, "expenses": format!("-{max}")}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["reply"], server::responder::EMPTY_MESSAGE);

        let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        let (status, body) = post_chat(port, json!({ "message": nested })).await;
        assert_eq!(status, 200);
        assert_eq!(body["reply"], server::responder::FALLBACK);

        // The server is still up.
        let (_, body) = post_chat(port, json!({"message": "1 + 1"})).await;
        assert_eq!(body["reply"], "2");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn empty_and_null_fields() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let (status, body) = post_chat(
            port,
            json!({"message": null, "allowance": null, "expenses": null}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["reply"], server::responder::EMPTY_MESSAGE);

        let (_, body) = post_chat(port, json!({})).await;
        assert_eq!(body["reply"], server::responder::EMPTY_MESSAGE);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let resp = reqwest::Client::new()
            .post(format!("http://127.0.0.1:{port}/api/chat"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn health_endpoint() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let body: Value = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"status": "ok", "service": "dolla-chat"}));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn http_backend_round_trip() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let backend =
            HttpChatBackend::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2));
        let reply = backend
            .send(&ChatRequest {
                message: "who are you".into(),
                allowance: String::new(),
                expenses: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(reply.reply, server::responder::HISTORY);
        assert!(reply.buttons.is_empty());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn widget_worker_flow_against_live_server() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let backend =
            HttpChatBackend::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2));
        let mut widget = ChatWidget::new(Arc::new(backend));

        widget.set_allowance("2000");
        widget.set_expenses("1500");
        let update = widget.send_message().await;
        assert!(matches!(&update.messages[0], BotMessage::Remote { html } if html.contains("Ksh500.00")));
        assert_eq!(widget.buttons(), ["Yes", "No"]);

        widget.press_button("Yes");
        assert_eq!(widget.session().state, ConversationState::AskStudent);
        widget.press_button("No");
        assert_eq!(widget.session().state, ConversationState::AskWork);
        let update = widget.press_button("Yes");

        let BotMessage::Plan { plan } = &update.messages[0] else {
            panic!("expected a worker plan");
        };
        assert_eq!(plan.savings, dec!(500));
        assert_eq!(widget.session().state, ConversationState::Start);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn widget_apologises_when_server_is_down() {
    timeout(TEST_TIMEOUT, async {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let backend =
            HttpChatBackend::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(1));
        let mut widget = ChatWidget::new(Arc::new(backend));
        widget.set_message("what is inflation?");
        let update = widget.send_message().await;
        assert_eq!(update.messages, vec![BotMessage::apology()]);
    })
    .await
    .expect("test timed out");
}
