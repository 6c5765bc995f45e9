use kz::{Mode, Tier};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use super::Context;
use crate::{Error, ErrorKind, Upstream};

const THUMBNAIL: &[u8] = b"RIFF\x24\x00\x00\x00WEBPVP8 ";

impl Context
{
	async fn mock_global_map(&self, name: &str, body: serde_json::Value)
	{
		Mock::given(method("GET"))
			.and(path(format!("/global/maps/name/{name}")))
			.respond_with(ResponseTemplate::new(200).set_body_json(body))
			.expect(1)
			.mount(&self.server)
			.await;
	}

	async fn mock_thumbnail(&self, name: &str, response: ResponseTemplate)
	{
		Mock::given(method("GET"))
			.and(path(format!("/thumbnails/{name}.webp")))
			.respond_with(response)
			.mount(&self.server)
			.await;
	}

	async fn mock_vnl(&self, name: &str, response: ResponseTemplate)
	{
		Mock::given(method("GET"))
			.and(path(format!("/vnl/maps/{name}")))
			.respond_with(response)
			.mount(&self.server)
			.await;
	}
}

fn thumbnail() -> ResponseTemplate
{
	ResponseTemplate::new(200).set_body_raw(THUMBNAIL, "image/webp")
}

#[tokio::test]
async fn invalid_names_make_no_requests()
{
	let ctx = Context::new().await;

	for name in ["", "kz_../../admin", "kz map", "kz_grotto?x=1", "kz-grotto"] {
		for mode in Mode::ALL {
			let error = ctx.client.resolve_map(name, mode).await.unwrap_err();

			assert!(matches!(error, Error::InvalidMapName { .. }), "{name}: {error:?}");
			assert_eq!(error.kind(), ErrorKind::InvalidInput);
		}
	}

	assert!(ctx.requests().await.is_empty());
}

#[tokio::test]
async fn non_vanilla_modes_skip_vnl()
{
	let ctx = Context::new().await;

	Mock::given(method("GET"))
		.and(path("/global/maps/name/kz_grotto"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"id": 992,
			"name": "kz_grotto",
			"difficulty": 3,
			"validated": true,
		})))
		.expect(2)
		.mount(&ctx.server)
		.await;

	Mock::given(method("GET"))
		.and(path("/vnl/maps/kz_grotto"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tpTier": 4, "proTier": 5 })))
		.expect(0)
		.mount(&ctx.server)
		.await;

	ctx.mock_thumbnail("kz_grotto", thumbnail()).await;

	for mode in [Mode::KZTimer, Mode::SimpleKZ] {
		let map = ctx.client.resolve_map("kz_grotto", mode).await.unwrap();

		assert_eq!(map.name, "kz_grotto");
		assert_eq!(map.tier, Tier::from(3));
		assert_eq!(map.vnl_tier, None);
		assert_eq!(map.vnl_pro_tier, None);
		assert_eq!(map.thumbnail.as_deref(), Some(THUMBNAIL));
	}

	assert!(ctx.requests_to("/vnl/").await.is_empty());
}

#[tokio::test]
async fn vanilla_includes_vnl_tiers()
{
	let ctx = Context::new().await;

	ctx.mock_global_map("kz_olympus", json!({ "name": "kz_olympus", "difficulty": 6 }))
		.await;

	ctx.mock_vnl(
		"kz_olympus",
		ResponseTemplate::new(200).set_body_json(json!({
			"name": "kz_olympus",
			"tpTier": 5,
			"proTier": 7,
		})),
	)
	.await;

	ctx.mock_thumbnail("kz_olympus", thumbnail()).await;

	let map = ctx.client.resolve_map("kz_olympus", Mode::Vanilla).await.unwrap();

	assert_eq!(map.tier, Tier::from(6));
	assert_eq!(map.vnl_tier, Some(Tier::from(5)));
	assert_eq!(map.vnl_pro_tier, Some(Tier::from(7)));
	assert!(map.thumbnail.is_some());
	assert!(ctx.warnings().is_empty(), "{:#?}", ctx.warnings());
}

#[tokio::test]
async fn vnl_failures_are_not_fatal()
{
	let ctx = Context::new().await;

	ctx.mock_global_map("kz_olympus", json!({ "difficulty": 6 })).await;
	ctx.mock_vnl("kz_olympus", ResponseTemplate::new(500)).await;
	ctx.mock_thumbnail("kz_olympus", thumbnail()).await;

	let map = ctx.client.resolve_map("kz_olympus", Mode::Vanilla).await.unwrap();

	assert_eq!(map.tier, Tier::from(6));
	assert_eq!(map.vnl_tier, None);
	assert_eq!(map.vnl_pro_tier, None);
	assert!(map.thumbnail.is_some());

	assert!(ctx.errors().iter().any(|event| event.field("status") == Some("500")));
	assert!(ctx
		.warnings()
		.iter()
		.any(|event| event.field("upstream") == Some("vnl.kz")));
}

#[tokio::test]
async fn malformed_vnl_tiers_are_dropped()
{
	for body in [
		json!({ "tpTier": "4", "proTier": 5 }),
		json!({ "tpTier": 4, "proTier": -1 }),
		json!("T4"),
		json!([4, 5]),
	] {
		let ctx = Context::new().await;

		ctx.mock_global_map("kz_olympus", json!({ "difficulty": 6 })).await;
		ctx.mock_vnl("kz_olympus", ResponseTemplate::new(200).set_body_json(body.clone()))
			.await;
		ctx.mock_thumbnail("kz_olympus", thumbnail()).await;

		let map = ctx.client.resolve_map("kz_olympus", Mode::Vanilla).await.unwrap();

		assert_eq!((map.vnl_tier, map.vnl_pro_tier), (None, None), "{body}");
		assert!(!ctx.warnings().is_empty(), "{body}");
	}
}

#[tokio::test]
async fn missing_thumbnail_is_not_fatal()
{
	let ctx = Context::new().await;

	ctx.mock_global_map("kz_grotto", json!({ "difficulty": 3 })).await;
	ctx.mock_thumbnail("kz_grotto", ResponseTemplate::new(404)).await;

	let map = ctx.client.resolve_map("kz_grotto", Mode::SimpleKZ).await.unwrap();

	assert_eq!(map.tier, Tier::from(3));
	assert_eq!(map.thumbnail, None);
	assert_eq!(ctx.requests_to("/thumbnails/").await.len(), 1);
}

#[tokio::test]
async fn unknown_maps_are_not_found()
{
	let ctx = Context::new().await;

	ctx.mock_global_map("kz_doesnotexist", serde_json::Value::Null).await;

	let error = ctx
		.client
		.resolve_map("kz_doesnotexist", Mode::Vanilla)
		.await
		.unwrap_err();

	assert!(matches!(error, Error::MapNotFound { ref name } if name == "kz_doesnotexist"), "{error:?}");
	assert_eq!(error.kind(), ErrorKind::NotFound);
	assert!(!error.kind().is_retryable());

	assert!(ctx.requests_to("/vnl/").await.is_empty());
	assert!(ctx.requests_to("/thumbnails/").await.is_empty());
}

#[tokio::test]
async fn global_api_failures_are_fatal()
{
	let ctx = Context::new().await;

	Mock::given(method("GET"))
		.and(path("/global/maps/name/kz_grotto"))
		.respond_with(ResponseTemplate::new(502))
		.expect(1)
		.mount(&ctx.server)
		.await;

	let error = ctx.client.resolve_map("kz_grotto", Mode::Vanilla).await.unwrap_err();

	assert!(matches!(error, Error::Unavailable { upstream: Upstream::GlobalApi, .. }), "{error:?}");
	assert!(ctx.errors().iter().any(|event| event.field("status") == Some("502")));
	assert!(ctx.requests_to("/vnl/").await.is_empty());
}

#[tokio::test]
async fn malformed_global_maps()
{
	for body in [
		json!({ "name": "kz_grotto" }),
		json!({ "difficulty": "3" }),
		json!({ "difficulty": 300 }),
		json!([]),
		json!([3]),
		json!([{ "difficulty": 3 }]),
	] {
		let ctx = Context::new().await;

		ctx.mock_global_map("kz_grotto", body.clone()).await;

		let error = ctx.client.resolve_map("kz_grotto", Mode::KZTimer).await.unwrap_err();

		assert_eq!(error.kind(), ErrorKind::UpstreamMalformed, "{body}");
		assert_eq!(error.upstream(), Some(Upstream::GlobalApi));
	}
}
