//! Resource façades against a mock Re:lation server: request shapes and
//! response mapping.

mod common;

use pretty_assertions::assert_eq;
use relation_client::models::{
    Chat, EmailAddress, MessageMethod, Patch, RecordIcon, TicketStatus,
};
use relation_client::resources::{
    CaseCategoryUpdate, CustomerSearch, CustomerUpdate, LabelUpdate, NewCaseCategory,
    NewCustomer, NewLabel, NewRecord, OutgoingMail, Page, TicketSearch, TicketUpdate,
};
use relation_client::RelationError;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api, client_for};

#[tokio::test]
async fn customer_search_sends_array_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("customer_groups/1/customers/search")))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "1"))
        .and(query_param("emails[]", "taro@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "customer_id": 5,
                "last_name": "Yamada",
                "first_name": "Taro",
                "emails": [{"email": "taro@example.com"}],
                "gender_cd": 1,
                "last_updated_at": "2024-01-01T00:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = CustomerSearch::new().with_email("taro@example.com");
    let customers = assert_ok!(client.customers().search(1, &search).await);

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].customer_id, Some(5));
    assert_eq!(customers[0].primary_email(), Some("taro@example.com"));
    assert!(customers[0].last_updated_at.is_some());
}

#[tokio::test]
async fn customer_create_omits_unset_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("customer_groups/1/customers/create")))
        .and(body_json(json!({
            "last_name": "Yamada",
            "emails": [{"email": "taro@example.com"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": 9,
            "last_name": "Yamada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customer = NewCustomer {
        last_name: Some("Yamada".into()),
        emails: Some(vec![EmailAddress::new("taro@example.com")]),
        ..Default::default()
    };
    let created = assert_ok!(client.customers().create(1, &customer).await);
    assert_eq!(created.customer_id, Some(9));
}

#[tokio::test]
async fn customer_email_path_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("customer_groups/1/customers/email/taro%2Btag%40example.com")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customer_id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customer = assert_ok!(
        client
            .customers()
            .get_by_email(1, "taro+tag@example.com")
            .await
    );
    assert_eq!(customer.customer_id, Some(3));
}

#[tokio::test]
async fn customer_update_sends_null_and_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api("customer_groups/1/customers/system_id1/C-0001")))
        .and(body_json(json!({"company_name": null, "tels": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customer_id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = CustomerUpdate {
        company_name: Patch::Null,
        tels: Patch::Value(Vec::new()),
        ..Default::default()
    };
    assert_ok!(
        client
            .customers()
            .update_by_system_id1(1, "C-0001", &update)
            .await
    );
}

#[tokio::test]
async fn customer_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api("customer_groups/1/customers/email/taro%40example.com")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(
        client
            .customers()
            .delete_by_email(1, "taro@example.com")
            .await
    );
}

#[tokio::test]
async fn customer_not_found_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("customer_groups/1/customers/system_id1/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.customers().get_by_system_id1(1, "missing").await);
    assert!(matches!(err, RelationError::ResourceNotFound(_)));
}

#[tokio::test]
async fn ticket_search_posts_filters_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/tickets/search")))
        .and(body_json(json!({
            "status_cds": ["open"],
            "assignee": "suzuki",
            "per_page": 50,
            "page": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ticket_id": 10, "title": "Order"},
            {"ticket_id": 11, "status_cd": "brand_new_status"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = TicketSearch::new()
        .with_status(TicketStatus::Open)
        .with_assignee("suzuki");
    let tickets = assert_ok!(client.tickets().search(1, &search).await);

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].display_title(), "Order");
    assert_eq!(tickets[1].status_cd, Some(TicketStatus::Unknown));
}

#[tokio::test]
async fn ticket_get_keeps_nested_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("1/tickets/42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket_id": 42,
            "status_cd": "ongoing",
            "messages": [
                {
                    "message_id": 1,
                    "method_cd": "mail",
                    "comments": [
                        {"comment": "first", "comment_type": "comment"},
                        {"comment": "second", "comment_type": "assign"}
                    ],
                    "attachments": [{"attachment_id": 100, "file_name": "a.pdf"}]
                },
                {"message_id": 2, "method_cd": "line"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ticket = assert_ok!(client.tickets().get(1, 42).await);

    assert_eq!(ticket.status_cd, Some(TicketStatus::Ongoing));
    let ids: Vec<_> = ticket.messages.iter().map(|m| m.message_id).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
    let comments: Vec<_> = ticket.messages[0]
        .comments
        .iter()
        .map(|c| c.comment.as_deref())
        .collect();
    assert_eq!(comments, vec![Some("first"), Some("second")]);
    assert_eq!(ticket.messages[0].attachments[0].attachment_id, Some(100));
    assert_eq!(ticket.messages[1].method_cd, Some(MessageMethod::Line));
}

#[tokio::test]
async fn ticket_update_sends_empty_label_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api("1/tickets/42")))
        .and(body_json(json!({"label_ids": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = TicketUpdate::new().with_label_ids(Vec::new());
    assert_ok!(client.tickets().update(1, 42, &update).await);
}

#[tokio::test]
async fn ticket_update_clears_pending_reason() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api("1/tickets/42")))
        .and(body_json(json!({"status_cd": "closed", "pending_reason_id": null})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = TicketUpdate::new()
        .with_status(TicketStatus::Closed)
        .clear_pending_reason();
    assert_ok!(client.tickets().update(1, 42, &update).await);
}

#[tokio::test]
async fn create_record_returns_created_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/records")))
        .and(body_json(json!({
            "subject": "Phone inquiry",
            "operated_at": "2024-05-01T10:00:00+09:00",
            "duration": 15,
            "body": "Asked about shipping.",
            "status_cd": "closed",
            "icon_cd": "meeting",
            "is_html": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message_id": 77, "ticket_id": 12})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = NewRecord::new(
        "Phone inquiry",
        "2024-05-01T10:00:00+09:00",
        15,
        "Asked about shipping.",
    )
    .with_icon(RecordIcon::Meeting);
    let created = assert_ok!(client.tickets().create_record(1, &record).await);
    assert_eq!(created.message_id, Some(77));
    assert_eq!(created.ticket_id, Some(12));
}

#[tokio::test]
async fn line_conversation_log_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("1/tickets/42/messages/7/line")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": "shop",
            "conversations": [
                {"line_conversation_id": 1, "note": "hello", "conversation_type": "text"},
                {"line_conversation_id": 2, "note": "bye", "conversation_type": "sticker"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chat = assert_ok!(
        client
            .chats()
            .get_conversations(1, 42, 7, MessageMethod::Line)
            .await
    );

    assert!(matches!(chat, Chat::Line(_)));
    let notes: Vec<_> = chat
        .conversations()
        .iter()
        .map(|c| c.base().note.clone())
        .collect();
    assert_eq!(notes, vec![Some("hello".to_string()), Some("bye".to_string())]);
}

#[tokio::test]
async fn conversations_for_mail_fail_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = assert_err!(
        client
            .chats()
            .get_conversations(1, 42, 7, MessageMethod::Mail)
            .await
    );
    assert!(matches!(err, RelationError::InvalidRequest(_)));
}

#[tokio::test]
async fn mail_reply_flattens_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/mails/reply")))
        .and(body_json(json!({
            "message_id": 7,
            "status_cd": "ongoing",
            "mail_account_id": 2,
            "to": "taro@example.com",
            "subject": "Re: Order",
            "body": "Shipped today.",
            "is_html": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message_id": 8, "ticket_id": 42})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mail = OutgoingMail::new(2, "taro@example.com", "Re: Order", "Shipped today.")
        .with_status(TicketStatus::Ongoing);
    let created = assert_ok!(client.mails().reply(1, 7, &mail).await);
    assert_eq!(created.message_id, Some(8));
}

#[tokio::test]
async fn mail_send_omits_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/mails")))
        .and(body_json(json!({
            "status_cd": "open",
            "mail_account_id": 2,
            "to": "taro@example.com",
            "subject": "Hello",
            "body": "<p>Hi</p>",
            "is_html": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message_id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mail = OutgoingMail::new(2, "taro@example.com", "Hello", "<p>Hi</p>").with_html();
    assert_ok!(client.mails().send(1, &mail).await);
}

#[tokio::test]
async fn mail_send_includes_reply_to_and_attachments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/mails")))
        .and(body_json(json!({
            "status_cd": "open",
            "mail_account_id": 2,
            "to": "taro@example.com",
            "subject": "Invoice",
            "body": "Attached.",
            "is_html": false,
            "reply_to": "billing@example.com",
            "attachments": [{"file_id": 10, "file_name": "invoice.pdf"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message_id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mail = OutgoingMail::new(2, "taro@example.com", "Invoice", "Attached.")
        .with_reply_to("billing@example.com")
        .with_attachments(vec![json!({"file_id": 10, "file_name": "invoice.pdf"})]);
    let created = assert_ok!(client.mails().send(1, &mail).await);
    assert_eq!(created.message_id, Some(11));
}

#[tokio::test]
async fn templates_non_list_response_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("1/templates")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let templates = assert_ok!(client.templates().list(1, Page::new()).await);
    assert!(templates.is_empty());
}

#[tokio::test]
async fn template_search_omits_empty_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/templates/search")))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"template_id": 1, "template_name": "Greeting"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let templates = assert_ok!(client.templates().search(1, Some("")).await);
    assert_eq!(templates[0].template_name.as_deref(), Some("Greeting"));
}

#[tokio::test]
async fn list_calls_forward_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("users")))
        .and(query_param("per_page", "5"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"mention_name": "suzuki", "status_cd": "available"},
            {"mention_name": "sato", "status_cd": "locked"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = assert_ok!(
        client
            .users()
            .list(Page::new().with_per_page(5).with_page(2))
            .await
    );
    let names: Vec<_> = users.iter().map(|u| u.mention_name.as_deref()).collect();
    assert_eq!(names, vec![Some("suzuki"), Some("sato")]);
    assert!(users[0].is_active());
    assert!(!users[1].is_active());
}

#[tokio::test]
async fn scoped_list_calls_use_their_paths() {
    let server = MockServer::start().await;
    for (p, body) in [
        ("customer_groups", json!([{"customer_group_id": 1, "name": "Main"}])),
        ("customer_groups/1/badges", json!([{"badge_id": 4, "name": "VIP"}])),
        ("1/pending_reasons", json!([{"pending_reason_id": 3, "snooze_term": "tomorrow"}])),
        ("1/mail_accounts", json!([{"mail_account_id": 2, "email": "support@example.com"}])),
        ("1/case_categories", json!([{"case_category_id": 6, "archived": "true"}])),
        ("1/labels", json!([{"label_id": 8, "color": "red"}])),
    ] {
        Mock::given(method("GET"))
            .and(path(api(p)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let groups = assert_ok!(client.customer_groups().list().await);
    assert_eq!(groups[0].name.as_deref(), Some("Main"));
    let badges = assert_ok!(client.badges().list(1, Page::new()).await);
    assert_eq!(badges[0].badge_id, Some(4));
    let reasons = assert_ok!(client.pending_reasons().list(1).await);
    assert_eq!(reasons[0].pending_reason_id, Some(3));
    let accounts = assert_ok!(client.mail_accounts().list(1, Page::new()).await);
    assert_eq!(accounts[0].email.as_deref(), Some("support@example.com"));
    let categories = assert_ok!(client.case_categories().list(1, Page::new()).await);
    assert_eq!(categories[0].case_category_id, Some(6));
    let labels = assert_ok!(client.labels().list(1, Page::new()).await);
    assert_eq!(labels[0].color.as_deref(), Some("red"));
}

#[tokio::test]
async fn label_and_case_category_writes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api("1/labels")))
        .and(body_json(json!({"name": "Urgent", "color": "red", "parent_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"label_id": 31})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api("1/labels/31")))
        .and(body_json(json!({"parent_id": null})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("1/case_categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"case_category_id": 12})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api("1/case_categories/12")))
        .and(body_json(json!({"archived": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let label = NewLabel::new("Urgent", "red").with_parent(2);
    let created = assert_ok!(client.labels().create(1, &label).await);
    assert_eq!(created.label_id, Some(31));

    let update = LabelUpdate {
        parent_id: Patch::Null,
        ..Default::default()
    };
    assert_ok!(client.labels().update(1, 31, &update).await);

    let category = NewCaseCategory::new("Returns");
    let created = assert_ok!(client.case_categories().create(1, &category).await);
    assert_eq!(created.case_category_id, Some(12));

    let update = CaseCategoryUpdate {
        archived: Patch::Value(true),
        ..Default::default()
    };
    assert_ok!(client.case_categories().update(1, 12, &update).await);
}

#[tokio::test]
async fn attachment_download_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("1/messages/attachments/100")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://files.example.com/a.pdf",
            "file_name": "a.pdf",
            "expires_in_sec": 300
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let download = assert_ok!(client.attachments().get_download_url(1, 100).await);
    assert_eq!(download.file_name.as_deref(), Some("a.pdf"));
    assert_eq!(download.expires_in_sec, Some(300));
}

#[tokio::test]
async fn test_connection_returns_message_boxes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("message_boxes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"message_box_id": 1, "name": "Support", "customer_group_id": 1},
            {"message_box_id": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let boxes = assert_ok!(client.test_connection().await);
    let names: Vec<_> = boxes.iter().map(|b| b.display_name()).collect();
    assert_eq!(names, vec!["Support", "(unnamed)"]);
}
