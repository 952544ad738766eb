//! Metadata client against a loopback HTTP stub.

use fetchflicks::controller::{SubmissionController, SubmissionState};
use fetchflicks::extractor::{MetadataSource, VideoId, YouTubeApiClient};
use fetchflicks::presenter::{ActionsRegion, RegionState};
use fetchflicks::LookupError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const VIDEO_ID: &str = "dQw4w9WgXcQ";

const ONE_ITEM: &str = r#"{
  "kind": "youtube#videoListResponse",
  "items": [
    {
      "id": "dQw4w9WgXcQ",
      "snippet": {
        "title": "Never Gonna Give You Up",
        "channelTitle": "Rick Astley",
        "thumbnails": {
          "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
          "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg" }
        }
      },
      "contentDetails": { "duration": "PT3M33S" },
      "statistics": { "viewCount": "1500000000", "likeCount": "17000000" }
    }
  ]
}"#;

const TWO_ITEMS: &str = r#"{
  "items": [
    {
      "id": "dQw4w9WgXcQ",
      "snippet": { "title": "First", "channelTitle": "One", "thumbnails": {} },
      "contentDetails": { "duration": "PT1M" }
    },
    {
      "id": "aaaaaaaaaaa",
      "snippet": { "title": "Second", "channelTitle": "Two", "thumbnails": {} },
      "contentDetails": { "duration": "PT2M" }
    }
  ]
}"#;

const NO_ITEMS: &str = r#"{ "kind": "youtube#videoListResponse", "items": [] }"#;

const QUOTA_ERROR: &str = r#"{
  "error": {
    "code": 403,
    "message": "The request cannot be completed because you have exceeded your quota."
  }
}"#;

/// Serves one canned response per connection and records request lines.
struct Stub {
    base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let hits_task = hits.clone();
        let requests_task = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                hits_task.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(serve(stream, response.clone(), requests_task.clone()));
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
            requests,
        }
    }

    fn client(&self, api_key: Option<&str>) -> YouTubeApiClient {
        YouTubeApiClient::new(http_client(), api_key, self.base_url.clone())
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(mut stream: TcpStream, response: String, requests: Arc<Mutex<Vec<String>>>) {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    if let Some(line) = String::from_utf8_lossy(&head).lines().next() {
        requests.lock().unwrap().push(line.to_string());
    }

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Loopback only; ignore any proxy configured in the environment.
fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn video_id() -> VideoId {
    VideoId::parse(VIDEO_ID).unwrap()
}

#[tokio::test]
async fn resolves_metadata_from_first_item() {
    let stub = Stub::start("200 OK", ONE_ITEM).await;
    let client = stub.client(Some("test-key"));

    let meta = client.fetch_metadata(&video_id()).await.expect("metadata");

    assert_eq!(meta.id.as_str(), VIDEO_ID);
    assert_eq!(meta.title, "Never Gonna Give You Up");
    assert_eq!(meta.channel_title, "Rick Astley");
    assert_eq!(meta.thumbnail_url, "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg");
    assert_eq!(meta.duration, "PT3M33S");
    assert_eq!(meta.view_count, Some(1_500_000_000));
    assert_eq!(meta.like_count, Some(17_000_000));

    assert_eq!(stub.hits(), 1);
    let lines = stub.request_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("GET /videos?"), "unexpected request line {}", lines[0]);
    assert!(lines[0].contains("id=dQw4w9WgXcQ"));
    assert!(lines[0].contains("key=test-key"));
    assert!(lines[0].contains("part=snippet"));
}

#[tokio::test]
async fn extra_items_are_ignored() {
    let stub = Stub::start("200 OK", TWO_ITEMS).await;

    let meta = stub
        .client(Some("test-key"))
        .fetch_metadata(&video_id())
        .await
        .expect("metadata");

    assert_eq!(meta.title, "First");
    assert_eq!(meta.thumbnail_url, "");
    assert_eq!(meta.view_count, None);
}

#[tokio::test]
async fn empty_items_is_not_found() {
    let stub = Stub::start("200 OK", NO_ITEMS).await;

    let result = stub.client(Some("test-key")).fetch_metadata(&video_id()).await;

    assert_eq!(result, Err(LookupError::NotFound));
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn error_status_carries_service_message() {
    let stub = Stub::start("403 Forbidden", QUOTA_ERROR).await;

    let result = stub.client(Some("test-key")).fetch_metadata(&video_id()).await;

    match result {
        Err(LookupError::Upstream { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.contains("exceeded your quota"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_key_never_touches_the_network() {
    let stub = Stub::start("200 OK", ONE_ITEM).await;

    for key in [None, Some(""), Some("YOUR_YOUTUBE_API_KEY")] {
        let client = stub.client(key);
        assert!(!client.has_credential());
        let result = client.fetch_metadata(&video_id()).await;
        assert_eq!(result, Err(LookupError::MissingCredential));
    }

    assert_eq!(stub.hits(), 0);
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = YouTubeApiClient::new(
        http_client(),
        Some("test-key"),
        format!("http://{}", addr),
    );
    let result = client.fetch_metadata(&video_id()).await;

    assert!(matches!(result, Err(LookupError::Network(_))), "got {:?}", result);
}

#[tokio::test]
async fn transport_errors_do_not_carry_the_key() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = YouTubeApiClient::new(
        http_client(),
        Some("SECRETKEY123"),
        format!("http://{}", addr),
    );
    let err = client.fetch_metadata(&video_id()).await.unwrap_err();

    assert!(!err.to_string().contains("SECRETKEY123"), "leaked: {}", err);
    assert!(!format!("{:?}", err).contains("SECRETKEY123"), "leaked: {:?}", err);
    assert!(!err.user_message().contains("SECRETKEY123"));
}

#[tokio::test]
async fn full_submission_against_stub() {
    let stub = Stub::start("200 OK", ONE_ITEM).await;
    let source = Arc::new(stub.client(Some("test-key")));
    let mut controller = SubmissionController::new(source, RegionState::new());

    let state = controller.submit("https://youtu.be/dQw4w9WgXcQ?t=5").await;
    assert!(matches!(state, SubmissionState::Success(_)));

    let regions = controller.presenter();
    let card = regions.video().expect("card");
    assert_eq!(card.duration_line, "Duration: 3:33");
    assert_eq!(card.watch_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert!(matches!(regions.actions(), ActionsRegion::DownloadNote(_)));
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn quota_failure_in_full_submission_shows_fallback() {
    let stub = Stub::start("403 Forbidden", QUOTA_ERROR).await;
    let source = Arc::new(stub.client(Some("test-key")));
    let mut controller = SubmissionController::new(source, RegionState::new());

    controller
        .submit("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    let regions = controller.presenter();
    assert!(!regions.is_busy());
    assert!(regions.video().is_none());
    assert!(matches!(regions.actions(), ActionsRegion::Fallback(_)));
    assert_eq!(
        regions.notice().map(|n| n.message.clone()),
        Some(
            "Unable to fetch video information. Check the configured YouTube API key and your network connection."
                .to_string()
        )
    );
}
