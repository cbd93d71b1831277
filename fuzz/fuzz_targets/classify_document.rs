#![no_main]

use benford::classifier::ClassifierConfig;
use benford::processor::{BenfordProcessor, Document, RoutingMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any byte stream must classify without panicking, in both deployments
    for (config, mode) in [
        (ClassifierConfig::default(), RoutingMode::Conformance),
        (ClassifierConfig::legacy(), RoutingMode::Suspicion),
    ] {
        if let Ok(processor) = BenfordProcessor::new(config, mode) {
            let routed = processor
                .process(Document::new("fuzz", data))
                .expect("classification of valid config never fails");
            assert_eq!(routed.document.content, data);
        }
    }
});
