// The built-in sample set exercises every grouping case: multi-model keys,
// a prefix-less rule and a flight-number-range rule that stays standalone.

use vmr_generator::sim::SampleSource;
use vmr_generator::{
    CliConfig, ExportEngine, ExportPipeline, FixedPrompt, LocalStorage, TracingNotifier,
};

#[tokio::test]
async fn sample_export_matches_the_documented_rule_set() {
    use clap::Parser;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("MatchRules.vmr");

    let config = CliConfig::parse_from([
        "vmrgen",
        "--sample",
        "--batch-size",
        "3",
        "--output",
        output.to_str().unwrap(),
    ]);

    let source = SampleSource::with_batch_size(config.batch_size);
    let prompt = FixedPrompt::new(config.output.clone());
    let pipeline = ExportPipeline::new(LocalStorage::new(), config, source, prompt);
    let engine = ExportEngine::new(pipeline, TracingNotifier);

    engine.run().await.unwrap();

    let xml = std::fs::read_to_string(&output).unwrap();

    let expected_rules = [
        "<ModelMatchRule CallsignPrefix=\"AIB\" TypeCode=\"CL60\" \
         ModelName=\"FSLTL_GA_C25C_ZZZ//FSLTL_GA_C25C_M-MIKE//FSLTL_GA_C25C_PS-CSF\"/>",
        "<ModelMatchRule CallsignPrefix=\"AIB\" TypeCode=\"CRJX\" ModelName=\"FSLTL_CRJ7_ZZZZ\"/>",
        "<ModelMatchRule TypeCode=\"C172\" ModelName=\"FSLTL_GA_C172_ZZZ\"/>",
        "<ModelMatchRule CallsignPrefix=\"DAL\" TypeCode=\"B739\" \
         ModelName=\"FSLTL_FAIB_B739_DAL-Delta_SSW//FSLTL_FAIB_B739_DAL-Delta_WL\"/>",
        "<ModelMatchRule CallsignPrefix=\"DAL\" FlightNumberRange=\"4439-4858\" \
         TypeCode=\"B739\" ModelName=\"FSLTL_FAIB_B739_DAL-Delta_WL\"/>",
    ];

    let mut last_position = 0;
    for rule in expected_rules {
        let position = xml
            .find(rule)
            .unwrap_or_else(|| panic!("missing rule: {}", rule));
        assert!(position >= last_position, "rules out of order: {}", rule);
        last_position = position;
    }

    assert_eq!(xml.matches("<ModelMatchRule ").count(), 5);
}
