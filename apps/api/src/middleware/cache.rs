//! # レスポンスキャッシュミドルウェア
//!
//! 200 を返した GET レスポンスをリクエスト URI（クエリ込み）単位で
//! TTL の間メモリに保持し、以降の同一リクエストにはハンドラを呼ばずに返す。
//!
//! - キャッシュから返したレスポンスには `x-cache: HIT` を付与する
//! - POST / PUT / PATCH / DELETE が成功（2xx）した時点でキャッシュ全体を破棄する
//! - 破棄より前に処理が始まった GET の結果は保存しない
//! - 保存時に期限切れのエントリを掃除する
//!
//! ```text
//! GET  /api/v1/workouts  → MISS → handler → 保存
//! GET  /api/v1/workouts  → HIT
//! POST /api/v1/workouts  → handler → 201 → 全破棄
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// キャッシュ状態を示すレスポンスヘッダ
pub const CACHE_STATUS_HEADER: &str = "x-cache";

#[derive(Clone)]
struct CachedResponse {
    status:    StatusCode,
    headers:   HeaderMap,
    body:      Bytes,
    stored_at: Instant,
}

impl CachedResponse {
    fn into_hit_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
            .headers_mut()
            .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("HIT"));
        response
    }
}

/// GET レスポンスのキャッシュ
///
/// `Clone` は同じ保存領域を共有する。
#[derive(Clone)]
pub struct ResponseCache {
    state: Arc<Mutex<CacheState>>,
    ttl:   Duration,
}

#[derive(Default)]
struct CacheState {
    entries:    HashMap<String, CachedResponse>,
    /// `clear` のたびに進む。保存時に取得時点の値と一致しなければ破棄する。
    generation: u64,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            ttl,
        }
    }

    /// 保持しているエントリ数
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全エントリを破棄する
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.generation += 1;
    }

    fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn get(&self, key: &str) -> Option<CachedResponse> {
        let mut state = self.lock();
        match state.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.clone()),
            Some(_) => {
                state.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// `generation` 以降に `clear` されていなければ保存する
    ///
    /// 保存のたびに期限切れのエントリを掃除する。
    fn put(&self, key: String, entry: CachedResponse, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation {
            return;
        }
        let ttl = self.ttl;
        state.entries.retain(|_, e| e.stored_at.elapsed() < ttl);
        state.entries.insert(key, entry);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// キャッシュを破棄する更新系メソッドか
fn is_mutation(method: &Method) -> bool {
    [Method::POST, Method::PUT, Method::PATCH, Method::DELETE].contains(method)
}

/// GET レスポンスをキャッシュし、更新系リクエストの成功でキャッシュを破棄する
pub async fn cache_responses(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if is_mutation(request.method()) {
        let response = next.run(request).await;
        if response.status().is_success() {
            tracing::debug!("更新系リクエストが成功したためキャッシュを破棄します");
            cache.clear();
        }
        return response;
    }
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = request.uri().to_string();
    if let Some(hit) = cache.get(&key) {
        tracing::debug!(%key, "キャッシュヒット");
        return hit.into_hit_response();
    }

    let generation = cache.generation();
    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ApiError::Internal(format!("failed to buffer response body: {e}"))
                .into_response();
        }
    };

    cache.put(
        key,
        CachedResponse {
            status:    parts.status,
            headers:   parts.headers.clone(),
            body:      bytes.clone(),
            stored_at: Instant::now(),
        },
        generation,
    );

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{
        Router,
        middleware::from_fn_with_state,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    /// 呼び出し回数を本文として返すテスト用ルーター
    fn create_test_app(cache: ResponseCache) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let get_calls = calls.clone();
        let post_calls = calls.clone();

        let app = Router::new()
            .route(
                "/items",
                get(move || {
                    let calls = get_calls.clone();
                    async move { (calls.fetch_add(1, Ordering::SeqCst) + 1).to_string() }
                })
                .post(move || {
                    let calls = post_calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        StatusCode::CREATED
                    }
                }),
            )
            .route("/missing", get(|| async { StatusCode::BAD_REQUEST }))
            .layer(from_fn_with_state(cache, cache_responses));

        (app, calls)
    }

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_2回目のgetはキャッシュから返りヘッダが付く() {
        // Given
        let (sut, calls) = create_test_app(ResponseCache::new(Duration::from_secs(60)));

        // When
        let first = sut.clone().oneshot(request(Method::GET, "/items")).await.unwrap();
        let second = sut.oneshot(request(Method::GET, "/items")).await.unwrap();

        // Then
        assert!(first.headers().get(CACHE_STATUS_HEADER).is_none());
        assert_eq!(second.headers()[CACHE_STATUS_HEADER], "HIT");
        assert_eq!(body_text(first).await, "1");
        assert_eq!(body_text(second).await, "1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_クエリが異なるgetは別エントリになる() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let (sut, calls) = create_test_app(cache.clone());

        sut.clone().oneshot(request(Method::GET, "/items")).await.unwrap();
        sut.oneshot(request(Method::GET, "/items?mode=amrap")).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_更新系リクエストの成功でキャッシュが破棄される() {
        // Given
        let cache = ResponseCache::new(Duration::from_secs(60));
        let (sut, calls) = create_test_app(cache.clone());
        sut.clone().oneshot(request(Method::GET, "/items")).await.unwrap();
        assert_eq!(cache.len(), 1);

        // When
        let response = sut
            .clone()
            .oneshot(request(Method::POST, "/items"))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(cache.is_empty());

        let after = sut.oneshot(request(Method::GET, "/items")).await.unwrap();
        assert!(after.headers().get(CACHE_STATUS_HEADER).is_none());
        assert_eq!(body_text(after).await, "3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_200以外のレスポンスはキャッシュしない() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let (sut, _) = create_test_app(cache.clone());

        let response = sut.oneshot(request(Method::GET, "/missing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_ttlを過ぎたエントリは再取得される() {
        // Given
        let (sut, calls) = create_test_app(ResponseCache::new(Duration::from_millis(20)));
        sut.clone().oneshot(request(Method::GET, "/items")).await.unwrap();

        // When
        tokio::time::sleep(Duration::from_millis(50)).await;
        let response = sut.oneshot(request(Method::GET, "/items")).await.unwrap();

        // Then
        assert!(response.headers().get(CACHE_STATUS_HEADER).is_none());
        assert_eq!(body_text(response).await, "2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_保存時に期限切れのエントリが掃除される() {
        // Given: 異なるクエリで 50 件キャッシュされた後に TTL が過ぎる
        let cache = ResponseCache::new(Duration::from_millis(20));
        let (sut, _) = create_test_app(cache.clone());
        for n in 0..50 {
            sut.clone()
                .oneshot(request(Method::GET, &format!("/items?n={n}")))
                .await
                .unwrap();
        }
        assert_eq!(cache.len(), 50);
        tokio::time::sleep(Duration::from_millis(50)).await;

        // When
        sut.oneshot(request(Method::GET, "/items?n=fresh"))
            .await
            .unwrap();

        // Then
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_headリクエストではキャッシュを破棄しない() {
        // Given
        let cache = ResponseCache::new(Duration::from_secs(60));
        let (sut, calls) = create_test_app(cache.clone());
        sut.clone().oneshot(request(Method::GET, "/items")).await.unwrap();

        // When
        let response = sut
            .clone()
            .oneshot(request(Method::HEAD, "/items"))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache.len(), 1);
        let after = sut.oneshot(request(Method::GET, "/items")).await.unwrap();
        assert_eq!(after.headers()[CACHE_STATUS_HEADER], "HIT");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_破棄より前に取得したレスポンスは保存しない() {
        // Given: GET の処理中に更新系リクエストがキャッシュを破棄した
        let cache = ResponseCache::new(Duration::from_secs(60));
        let generation = cache.generation();
        cache.clear();

        // When
        cache.put(
            "/items".to_string(),
            CachedResponse {
                status:    StatusCode::OK,
                headers:   HeaderMap::new(),
                body:      Bytes::from_static(b"stale"),
                stored_at: Instant::now(),
            },
            generation,
        );

        // Then
        assert!(cache.is_empty());
    }
}
