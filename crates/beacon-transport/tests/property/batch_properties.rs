use beacon_core::config::TransportConfig;
use beacon_core::Payload;
use beacon_transport::{HttpBatchRequest, Transport};
use proptest::prelude::*;
use test_fixtures::RecordingClient;

proptest! {
    #[test]
    fn flush_count_is_ceiling_of_hits_over_batch_size(hits in 0usize..120, max in 1usize..30) {
        let config = TransportConfig {
            max_batch_size: Some(max),
            ..Default::default()
        };
        let client = RecordingClient::new();
        let log = client.log();
        let mut http = HttpBatchRequest::with_client(client, &config);
        for n in 0..hits {
            let payload: Payload = [("n", n.to_string())].into_iter().collect();
            http.send(payload).unwrap();
        }

        // Only full batches go out before close.
        prop_assert_eq!(log.post_count(), hits / max);
        http.close().unwrap();

        let sizes = log.batch_sizes();
        prop_assert_eq!(sizes.len(), hits.div_ceil(max));
        if let Some((last, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&s| s == max));
            let remainder = hits % max;
            prop_assert_eq!(*last, if remainder == 0 { max } else { remainder });
        }
        prop_assert_eq!(sizes.iter().sum::<usize>(), hits);
    }
}
