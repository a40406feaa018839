//! Integration tests for pictor-mcp.
//!
//! Exercise the full dispatch path — JSON-RPC message in, tool result out —
//! against a stub model backend, covering protocol edge cases, validation
//! ordering, batch ordering, and artifact naming.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

use pictor::request::GenerateContentRequest;
use pictor::response::GenerateContentResponse;
use pictor::{templates, CompareType, ModelBackend, PictorError, PictorResult};
use pictor_mcp::protocol::ProtocolHandler;
use pictor_mcp::service::ImageService;
use pictor_mcp::transport::framing;
use pictor_mcp::types::*;

const IMAGE_MODEL: &str = "stub-image-model";
const TEXT_MODEL: &str = "stub-text-model";

// ─────────────────────── stub backend ───────────────────────

/// Canned model backend: answers image requests with bytes derived from the
/// prompt, text requests with a fixed reply, and fails or delays on demand.
struct StubBackend {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
    delays_ms: HashMap<String, u64>,
    fail_prompts: HashSet<String>,
    fail_calls: HashSet<usize>,
    image_mime: String,
    text_reply: String,
}

impl StubBackend {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            delays_ms: HashMap::new(),
            fail_prompts: HashSet::new(),
            fail_calls: HashSet::new(),
            image_mime: "image/png".to_string(),
            text_reply: "stub analysis".to_string(),
        }
    }

    fn with_delay(mut self, prompt: &str, ms: u64) -> Self {
        self.delays_ms.insert(prompt.to_string(), ms);
        self
    }

    fn failing_prompt(mut self, prompt: &str) -> Self {
        self.fail_prompts.insert(prompt.to_string());
        self
    }

    fn failing_call(mut self, index: usize) -> Self {
        self.fail_calls.insert(index);
        self
    }

    fn with_mime(mut self, mime: &str) -> Self {
        self.image_mime = mime.to_string();
        self
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn recorded(&self) -> Vec<(String, GenerateContentRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

fn prompt_of(request: &GenerateContentRequest) -> String {
    request
        .contents
        .first()
        .and_then(|content| {
            content.parts.iter().find_map(|part| match part {
                pictor::request::Part::Text { text } => Some(text.clone()),
                _ => None,
            })
        })
        .unwrap_or_default()
}

#[async_trait]
impl ModelBackend for StubBackend {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> PictorResult<GenerateContentResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = prompt_of(request);
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));

        if let Some(ms) = self.delays_ms.get(&prompt) {
            tokio::time::sleep(std::time::Duration::from_millis(*ms)).await;
        }

        if self.fail_calls.contains(&call) || self.fail_prompts.contains(&prompt) {
            return Err(PictorError::Api {
                status: 500,
                message: format!("stub failure for '{prompt}'"),
            });
        }

        let value = if model == TEXT_MODEL {
            json!({
                "candidates": [{
                    "content": { "parts": [{ "text": self.text_reply }] }
                }]
            })
        } else {
            let data = base64::engine::general_purpose::STANDARD
                .encode(format!("image for {prompt}"));
            json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "Here you go:" },
                            { "inlineData": { "mimeType": self.image_mime, "data": data } }
                        ]
                    }
                }]
            })
        };

        Ok(serde_json::from_value(value).expect("stub response is valid"))
    }
}

// ─────────────────────── helpers ───────────────────────

fn handler_with(stub: StubBackend) -> (ProtocolHandler, Arc<StubBackend>) {
    let stub = Arc::new(stub);
    let backend: Arc<dyn ModelBackend> = stub.clone();
    let service = Arc::new(ImageService::new(backend, IMAGE_MODEL, TEXT_MODEL));
    (ProtocolHandler::new(service), stub)
}

fn mcp_request(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

fn init_request() -> Value {
    mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }),
    )
}

async fn send(handler: &ProtocolHandler, msg: Value) -> Option<Value> {
    let parsed: JsonRpcMessage = serde_json::from_value(msg).unwrap();
    handler.handle_message(parsed).await
}

async fn send_unwrap(handler: &ProtocolHandler, msg: Value) -> Value {
    send(handler, msg).await.expect("expected response")
}

async fn call_tool(handler: &ProtocolHandler, name: &str, arguments: Value) -> Value {
    let msg = mcp_request(7, "tools/call", json!({ "name": name, "arguments": arguments }));
    send_unwrap(handler, msg).await
}

fn result_text(resp: &Value) -> &str {
    resp["result"]["content"][0]["text"].as_str().unwrap()
}

fn is_tool_error(resp: &Value) -> bool {
    resp["result"]["isError"].as_bool() == Some(true)
}

fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

// ═══════════════════════════════════════════════════════
// PROTOCOL EDGE CASES
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let result = framing::parse_message(r#"{"broken":"#);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().code(), -32700);

    assert!(framing::parse_message("").is_err());
    assert!(framing::parse_message(r#"{"jsonrpc":"2.0","id":1,"method":"#).is_err());
}

#[tokio::test]
async fn future_protocol_version_is_answered_with_ours() {
    let (handler, _) = handler_with(StubBackend::new());

    let msg = mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2026-01-01",
            "capabilities": {},
            "clientInfo": { "name": "future-client", "version": "99.0" }
        }),
    );
    let resp = send_unwrap(&handler, msg).await;

    assert!(resp.get("result").is_some(), "got: {resp}");
    assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(resp["result"]["serverInfo"]["name"], "pictor-mcp");
}

#[tokio::test]
async fn unknown_method_and_unknown_tool() {
    let (handler, _) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = send_unwrap(&handler, mcp_request(1, "foo/bar", json!({}))).await;
    assert_eq!(resp["error"]["code"], -32601);

    let resp = send_unwrap(
        &handler,
        mcp_request(2, "tools/call", json!({ "name": "nonexistent_tool", "arguments": {} })),
    )
    .await;
    assert_eq!(resp["error"]["code"], -32803);
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_rejected() {
    let (handler, _) = handler_with(StubBackend::new());

    let msg = json!({
        "jsonrpc": "1.0",
        "id": 1,
        "method": "ping",
        "params": {}
    });
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(resp["error"]["code"], -32600);
}

#[tokio::test]
async fn tools_list_names_all_eight() {
    let (handler, _) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = send_unwrap(&handler, mcp_request(1, "tools/list", json!({}))).await;
    let tools = resp["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "generate_image",
            "edit_image",
            "analyze_image",
            "multi_image_edit",
            "batch_generate",
            "generate_variations",
            "generate_with_template",
            "compare_images",
        ]
    );
}

// ═══════════════════════════════════════════════════════
// VALIDATION BEFORE I/O
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn missing_image_reference_fails_before_any_call() {
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    for tool in ["edit_image", "analyze_image", "generate_variations"] {
        let resp = call_tool(&handler, tool, json!({ "prompt": "do something" })).await;
        assert!(is_tool_error(&resp), "{tool} should report a tool error: {resp}");
        assert!(
            result_text(&resp).contains("imageData") || result_text(&resp).contains("imagePath"),
            "{tool} error should name the missing fields"
        );
    }

    assert_eq!(stub.call_count(), 0, "no external call may happen on invalid input");
}

#[tokio::test]
async fn multi_image_edit_checks_every_element() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "multi_image_edit",
        json!({
            "prompt": "merge",
            "images": [
                { "imageData": "aGk=" },
                { "description": "no source at all" }
            ],
            "outputDir": dir.path()
        }),
    )
    .await;

    assert!(is_tool_error(&resp), "got: {resp}");
    assert!(result_text(&resp).contains("images[1]"));
    assert_eq!(stub.call_count(), 0);
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn sampling_ranges_are_checked_before_network() {
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_image",
        json!({ "prompt": "a cat", "config": { "temperature": 2.5 } }),
    )
    .await;
    assert!(is_tool_error(&resp));
    assert!(result_text(&resp).contains("temperature"));

    let resp = call_tool(
        &handler,
        "generate_image",
        json!({ "prompt": "a cat", "config": { "topK": 41 } }),
    )
    .await;
    assert!(is_tool_error(&resp));

    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn variation_count_is_bounded() {
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_variations",
        json!({ "imageData": "aGk=", "count": 6 }),
    )
    .await;
    assert!(is_tool_error(&resp));
    assert!(result_text(&resp).contains("count"));
    assert_eq!(stub.call_count(), 0);
}

// ═══════════════════════════════════════════════════════
// SINGLE-ARTIFACT TOOLS
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn generate_image_writes_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_image",
        json!({ "prompt": "a red fox", "outputDir": dir.path() }),
    )
    .await;

    assert!(!is_tool_error(&resp), "got: {resp}");
    let text = result_text(&resp);
    assert!(text.contains("saved to"), "summary should include the path: {text}");

    let files = files_in(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("generated-image-"));
    assert!(files[0].ends_with(".png"));

    // Round-trip: bytes on disk equal the decoded payload from the response.
    let written = std::fs::read(dir.path().join(&files[0])).unwrap();
    assert_eq!(written, b"image for a red fox");
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn jpeg_response_gets_jpg_extension() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, _) = handler_with(StubBackend::new().with_mime("image/jpeg"));
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_image",
        json!({ "prompt": "a jpeg", "outputDir": dir.path() }),
    )
    .await;
    assert!(!is_tool_error(&resp));

    let files = files_in(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".jpg"), "got {}", files[0]);
}

#[tokio::test]
async fn edit_image_sends_prompt_then_inline_png() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "edit_image",
        json!({
            "prompt": "make it blue",
            "imageData": "c29tZWJ5dGVz",
            "outputDir": dir.path()
        }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");
    assert!(files_in(dir.path())[0].starts_with("edited-image-"));

    let recorded = stub.recorded();
    assert_eq!(recorded.len(), 1);
    let (model, request) = &recorded[0];
    assert_eq!(model, IMAGE_MODEL);

    let value = serde_json::to_value(request).unwrap();
    let parts = value["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts[0]["text"], "make it blue");
    // Inline payloads are forwarded verbatim and declared PNG, never sniffed.
    assert_eq!(parts[1]["inlineData"]["data"], "c29tZWJ5dGVz");
    assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
    assert_eq!(
        value["generationConfig"]["responseModalities"],
        json!(["TEXT", "IMAGE"])
    );
}

#[tokio::test]
async fn analyze_image_uses_text_model_without_modalities() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("shot.JPG");
    std::fs::write(&image_path, b"jpegish").unwrap();

    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "analyze_image",
        json!({ "prompt": "what is this?", "imagePath": image_path }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");
    assert_eq!(result_text(&resp), "stub analysis");

    let recorded = stub.recorded();
    let (model, request) = &recorded[0];
    assert_eq!(model, TEXT_MODEL);

    let value = serde_json::to_value(request).unwrap();
    // Uppercase .JPG still resolves to image/jpeg.
    assert_eq!(
        value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
        "image/jpeg"
    );
    assert!(value["generationConfig"].get("responseModalities").is_none());
}

#[tokio::test]
async fn missing_file_is_reported_not_fatal() {
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "analyze_image",
        json!({ "prompt": "what?", "imagePath": "/no/such/file.png" }),
    )
    .await;
    assert!(is_tool_error(&resp));
    assert!(result_text(&resp).contains("/no/such/file.png"));
    assert_eq!(stub.call_count(), 0);

    // The handler keeps serving after the failure.
    let resp = send_unwrap(&handler, mcp_request(9, "ping", json!({}))).await;
    assert!(resp.get("result").is_some());
}

#[tokio::test]
async fn multi_image_edit_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let second = dir.path().join("second.webp");
    std::fs::write(&second, b"webp bytes").unwrap();

    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "multi_image_edit",
        json!({
            "prompt": "blend",
            "images": [
                { "imageData": "Zmlyc3Q=", "description": "first" },
                { "imagePath": second }
            ],
            "outputDir": dir.path()
        }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");

    let recorded = stub.recorded();
    let value = serde_json::to_value(&recorded[0].1).unwrap();
    let parts = value["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0]["text"], "blend");
    assert_eq!(parts[1]["inlineData"]["data"], "Zmlyc3Q=");
    assert_eq!(parts[2]["inlineData"]["mimeType"], "image/webp");

    let files = files_in(dir.path());
    assert!(files.iter().any(|f| f.starts_with("multi-image-result-")));
}

// ═══════════════════════════════════════════════════════
// BATCH AND VARIATIONS
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn sequential_batch_reports_in_order_past_failures() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new().failing_prompt("B"));
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "batch_generate",
        json!({ "prompts": ["A", "B", "C"], "outputDir": dir.path() }),
    )
    .await;
    assert!(!is_tool_error(&resp), "batch itself must not error: {resp}");

    let report: Value = serde_json::from_str(result_text(&resp)).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["succeeded"], 2);

    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes[0]["prompt"], "A");
    assert_eq!(outcomes[1]["prompt"], "B");
    assert_eq!(outcomes[2]["prompt"], "C");
    assert_eq!(outcomes[0]["success"], true);
    assert_eq!(outcomes[1]["success"], false);
    assert_eq!(outcomes[2]["success"], true);
    assert!(outcomes[1]["error"].as_str().unwrap().contains("stub failure"));
    assert!(outcomes[1].get("filepath").is_none());

    assert_eq!(stub.call_count(), 3, "failure of B must not abort C");

    let files = files_in(dir.path());
    assert!(files.iter().any(|f| f.starts_with("batch-0-")));
    assert!(files.iter().any(|f| f.starts_with("batch-2-")));
    assert!(!files.iter().any(|f| f.starts_with("batch-1-")));
}

#[tokio::test]
async fn parallel_batch_orders_by_index_not_completion() {
    let dir = tempfile::tempdir().unwrap();
    // A is slowest, B fastest — completion order inverts input order.
    let stub = StubBackend::new()
        .with_delay("A", 80)
        .with_delay("C", 20);
    let (handler, stub) = handler_with(stub);
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "batch_generate",
        json!({ "prompts": ["A", "B", "C"], "parallel": true, "outputDir": dir.path() }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");

    let report: Value = serde_json::from_str(result_text(&resp)).unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    for (index, prompt) in ["A", "B", "C"].iter().enumerate() {
        assert_eq!(outcomes[index]["prompt"], *prompt, "result[{index}] must match input index");
        assert_eq!(outcomes[index]["success"], true);
        let path = outcomes[index]["filepath"].as_str().unwrap();
        assert!(path.contains(&format!("batch-{index}-")));
    }
    assert_eq!(stub.call_count(), 3);
}

#[tokio::test]
async fn variations_skip_failures_and_continue() {
    let dir = tempfile::tempdir().unwrap();
    // Second model call (index 1) fails; first and third succeed.
    let (handler, stub) = handler_with(StubBackend::new().failing_call(1));
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_variations",
        json!({ "imageData": "c3Jj", "count": 3, "outputDir": dir.path() }),
    )
    .await;
    assert!(!is_tool_error(&resp), "variations must not raise past the boundary: {resp}");

    let text = result_text(&resp);
    assert!(text.contains("2 of 3"), "got: {text}");
    assert!(text.contains("1 skipped"), "got: {text}");

    let files = files_in(dir.path());
    assert!(files.iter().any(|f| f.starts_with("variation-0-")));
    assert!(!files.iter().any(|f| f.starts_with("variation-1-")));
    assert!(files.iter().any(|f| f.starts_with("variation-2-")));
    assert_eq!(stub.call_count(), 3, "all variations attempted sequentially");
}

#[tokio::test]
async fn variation_strength_maps_to_temperature() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    // Default strength (moderate) fills in temperature 0.7.
    call_tool(
        &handler,
        "generate_variations",
        json!({ "imageData": "c3Jj", "count": 1, "outputDir": dir.path() }),
    )
    .await;

    // Caller temperature wins over the strength mapping.
    call_tool(
        &handler,
        "generate_variations",
        json!({
            "imageData": "c3Jj",
            "count": 1,
            "variationStrength": "strong",
            "config": { "temperature": 0.1 },
            "outputDir": dir.path()
        }),
    )
    .await;

    let recorded = stub.recorded();
    let first = serde_json::to_value(&recorded[0].1).unwrap();
    assert_eq!(first["generationConfig"]["temperature"], 0.7);
    let second = serde_json::to_value(&recorded[1].1).unwrap();
    assert_eq!(second["generationConfig"]["temperature"], 0.1);
}

// ═══════════════════════════════════════════════════════
// TEMPLATES AND COMPARISON
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn template_prompt_is_template_text_plus_customization() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_with_template",
        json!({ "template": "logo", "customization": "for a coffee shop", "outputDir": dir.path() }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");

    let logo = templates::find("logo").unwrap();
    let recorded = stub.recorded();
    let sent = prompt_of(&recorded[0].1);
    assert_eq!(sent, format!("{}. for a coffee shop", logo.prompt));

    let files = files_in(dir.path());
    assert!(files[0].starts_with("logo-"), "prefix is the template name: {}", files[0]);
}

#[tokio::test]
async fn unknown_template_is_rejected_with_the_catalog() {
    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "generate_with_template",
        json!({ "template": "watercolor", "customization": "x" }),
    )
    .await;
    assert!(is_tool_error(&resp));
    assert!(result_text(&resp).contains("logo"), "error lists valid names");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn compare_images_selects_prompt_by_type() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    std::fs::write(&a, b"aaa").unwrap();
    std::fs::write(&b, b"bbb").unwrap();

    let (handler, stub) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = call_tool(
        &handler,
        "compare_images",
        json!({ "image1Path": a, "image2Path": b, "compareType": "differences" }),
    )
    .await;
    assert!(!is_tool_error(&resp), "got: {resp}");
    assert_eq!(result_text(&resp), "stub analysis");

    let recorded = stub.recorded();
    let (model, request) = &recorded[0];
    assert_eq!(model, TEXT_MODEL);
    assert_eq!(prompt_of(request), CompareType::Differences.prompt());

    let value = serde_json::to_value(request).unwrap();
    let parts = value["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 3, "prompt plus both images");
}

// ═══════════════════════════════════════════════════════
// PROMPTS SURFACE
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn prompts_list_and_get_mirror_the_template_catalog() {
    let (handler, _) = handler_with(StubBackend::new());
    send_unwrap(&handler, init_request()).await;

    let resp = send_unwrap(&handler, mcp_request(1, "prompts/list", json!({}))).await;
    let prompts = resp["result"]["prompts"].as_array().unwrap();
    assert_eq!(prompts.len(), 10);

    let resp = send_unwrap(
        &handler,
        mcp_request(
            2,
            "prompts/get",
            json!({ "name": "poster", "arguments": { "customization": "for a jazz night" } }),
        ),
    )
    .await;
    let text = resp["result"]["messages"][0]["content"]["text"].as_str().unwrap();
    let poster = templates::find("poster").unwrap();
    assert_eq!(text, format!("{}. for a jazz night", poster.prompt));

    let resp = send_unwrap(
        &handler,
        mcp_request(3, "prompts/get", json!({ "name": "watercolor" })),
    )
    .await;
    assert_eq!(resp["error"]["code"], -32804);
}
