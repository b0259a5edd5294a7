//! Transport behavior: status passthrough, connection and body-read failures,
//! local rejections and concurrent use of one client.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mws_auth::Credentials;
    use mws_core::{Endpoint, Marketplace};
    use mws_products::{
        CompetitivePricingRequest, LowestPricedOffersRequest, MatchingProductRequest, MwsClient,
        ProductsError,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::{MockServer, TEST_ACCESS_KEY, TEST_SECRET_KEY, TEST_SELLER_ID, test_client};

    const ERROR_BODY: &str =
        "<ErrorResponse><Error><Code>RequestThrottled</Code></Error></ErrorResponse>";

    fn pricing_request() -> CompetitivePricingRequest {
        CompetitivePricingRequest::new(Marketplace::UnitedStates.id(), ["B000123456"])
    }

    #[tokio::test]
    async fn test_should_return_error_status_as_response() {
        let mut server = MockServer::start(503, ERROR_BODY).await;
        let client = test_client(server.endpoint.clone());

        let response = client
            .get_competitive_pricing_for_asin(&pricing_request())
            .await
            .unwrap();

        assert_eq!(response.status.as_u16(), 503);
        assert!(!response.is_success());
        assert_eq!(response.into_body(), ERROR_BODY);
        server.next_request().await;
    }

    #[tokio::test]
    async fn test_should_fail_with_transport_error_when_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(Endpoint::new(addr.to_string()).with_scheme("http"));
        let err = client
            .get_competitive_pricing_for_asin(&pricing_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductsError::Transport(_)), "{err:?}");
        assert!(!err.is_local());
    }

    #[tokio::test]
    async fn test_should_fail_with_read_error_on_truncated_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 4096];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    return;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
                .await
                .unwrap();
            stream.shutdown().await.unwrap();
        });

        let client = test_client(Endpoint::new(addr.to_string()).with_scheme("http"));
        let err = client
            .get_competitive_pricing_for_asin(&pricing_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductsError::Read(_)), "{err:?}");
        assert!(!err.is_local());
    }

    #[tokio::test]
    async fn test_should_not_send_invalid_requests() {
        let mut server = MockServer::start(200, "<ok/>").await;
        let client = test_client(server.endpoint.clone());

        let too_many_ids = MatchingProductRequest::new(
            Marketplace::UnitedStates.id(),
            "ASIN",
            ["1", "2", "3", "4", "5", "6"],
        );
        let unknown_type =
            MatchingProductRequest::new(Marketplace::UnitedStates.id(), "XYZ", ["B01"]);
        let too_many_asins = CompetitivePricingRequest::new(
            Marketplace::UnitedStates.id(),
            (0..21).map(|i| format!("B{i:09}")),
        );
        let bad_condition =
            LowestPricedOffersRequest::new(Marketplace::UnitedStates.id(), "B01", "new");

        for err in [
            client.get_matching_product_for_id(&too_many_ids).await,
            client.get_matching_product_for_id(&unknown_type).await,
            client.get_competitive_pricing_for_asin(&too_many_asins).await,
            client.get_lowest_priced_offers_for_asin(&bad_condition).await,
        ]
        .into_iter()
        .map(Result::unwrap_err)
        {
            assert!(matches!(err, ProductsError::InvalidArgument(_)), "{err:?}");
            assert!(err.is_local());
        }

        // A valid call afterwards is the first thing the listener sees.
        client
            .get_competitive_pricing_for_asin(&pricing_request())
            .await
            .unwrap();
        let request = tokio::time::timeout(Duration::from_secs(5), server.next_request())
            .await
            .unwrap();
        assert!(request.query().contains("Action=GetCompetitivePricingForASIN"));
    }

    #[tokio::test]
    async fn test_should_include_auth_token_when_configured() {
        let mut server = MockServer::start(200, "<ok/>").await;
        let credentials = Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY, TEST_SELLER_ID)
            .with_auth_token("amzn.mws.token");
        let client = MwsClient::builder(credentials)
            .endpoint(server.endpoint.clone())
            .http_client(reqwest::Client::builder().no_proxy().build().unwrap())
            .build()
            .unwrap();

        client
            .get_competitive_pricing_for_asin(&pricing_request())
            .await
            .unwrap();

        let request = server.next_request().await;
        assert!(request.query().contains("MWSAuthToken=amzn.mws.token"));
    }

    #[tokio::test]
    async fn test_should_share_client_across_tasks() {
        let mut server = MockServer::start(200, "<ok/>").await;
        let client = test_client(server.endpoint.clone());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move {
                    client
                        .get_competitive_pricing_for_asin(&CompetitivePricingRequest::new(
                            Marketplace::UnitedStates.id(),
                            [format!("B{i:09}")],
                        ))
                        .await
                })
            })
            .collect();

        for handle in handles {
            let response = handle.await.unwrap().unwrap();
            assert!(response.is_success());
        }

        let mut asins = Vec::new();
        for _ in 0..8 {
            let request = server.next_request().await;
            asins.push(
                request
                    .query_params()
                    .into_iter()
                    .find(|(k, _)| *k == "ASINList.ASIN.1")
                    .map(|(_, v)| v.to_owned())
                    .unwrap(),
            );
        }
        asins.sort();
        let expected: Vec<_> = (0..8).map(|i| format!("B{i:09}")).collect();
        assert_eq!(asins, expected);
    }
}
