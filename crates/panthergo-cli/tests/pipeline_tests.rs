//! Integration tests for the enrichment pipeline against a mock PANTHER
//! service, driven through the library API.

mod common;

use common::*;
use panthergo_cli::commands::enrich::{self, EnrichArgs};
use panthergo_cli::writer::read_table;
use panthergo_cli::{CliError, Config, OntologyTable};
use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::new();
    config.set_server_url(server.uri());
    config.set_verbose(true);
    config
}

fn args_for(ws: &Workspace) -> EnrichArgs {
    EnrichArgs {
        input: ws.input.clone(),
        reference: ws.reference.clone(),
        organism: 10090,
        annotation: "GO:0008150".to_string(),
        test_type: "FISHER".to_string(),
        correction: "FDR".to_string(),
        experiment_name: "knockout".to_string(),
        output_dir: ws.output.clone(),
    }
}

#[tokio::test]
async fn test_two_terms_split_by_fdr() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .and(body_string_contains("geneInputList=G1%2CG2&"))
        .and(body_string_contains("refInputList=G1%2CG2%2CG3"))
        .and(body_string_contains("organism=10090"))
        .and(body_string_contains("refOrganism=10090"))
        .and(body_string_contains("annotDataSet=GO%3A0008150"))
        .and(body_string_contains("enrichmentTestType=FISHER"))
        .and(body_string_contains("correction=FDR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_term_response()))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let outcome = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args_for(&ws))
        .await
        .unwrap();

    assert_eq!(outcome.total_terms, 2);
    assert_eq!(outcome.significant_terms, 1);
    assert_eq!(outcome.files.significant, ws.significant_csv("knockout", "GO-BP"));
    assert_eq!(outcome.files.all, ws.all_csv("knockout", "GO-BP"));

    let significant = read_table(&outcome.files.significant).unwrap();
    assert_eq!(significant.len(), 1);
    assert_eq!(significant.rows()[0].id.as_deref(), Some("GO:0000001"));
    assert_eq!(significant.rows()[0].fdr, Some(0.01));

    let all = read_table(&outcome.files.all).unwrap();
    let fdrs: Vec<_> = all.rows().iter().map(|r| r.fdr.unwrap()).collect();
    assert_eq!(fdrs, vec![0.01, 0.2]);
    assert_eq!(all.rows()[1].label.as_deref(), Some("mitochondrial genome maintenance"));
}

#[tokio::test]
async fn test_correction_flag_reaches_the_request() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .and(body_string_contains("correction=BONFERRONI"))
        .and(body_string_contains("enrichmentTestType=BINOMIAL"))
        .and(body_string_contains("annotDataSet=GO%3A0003674"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_term_response()))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let mut args = args_for(&ws);
    args.correction = "BONFERRONI".to_string();
    args.test_type = "BINOMIAL".to_string();
    args.annotation = "GO:0003674".to_string();

    let outcome = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args)
        .await
        .unwrap();
    assert!(outcome.files.all.ends_with("knockout_GO-MF_pantherGO.csv"));
}

#[tokio::test]
async fn test_unsupported_organism_sends_no_query() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_term_response()))
        .expect(0)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let mut args = args_for(&ws);
    args.organism = 7227;

    let err = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::UnsupportedOrganism(7227)));
    assert!(!ws.output.join("all_pantherGO_results").exists());
}

#[tokio::test]
async fn test_unsupported_annotation_sends_no_query() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let mut args = args_for(&ws);
    args.annotation = "GO:1234567".to_string();

    let err = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("GO:1234567"));
}

#[tokio::test]
async fn test_non_200_is_request_failed() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let err = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args_for(&ws))
        .await
        .unwrap_err();

    match err {
        CliError::RequestFailed { url, status } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with(ENRICH_PATH));
        }
        other => panic!("expected RequestFailed, got {other}"),
    }
    assert!(!ws.all_csv("knockout", "GO-BP").exists());
}

#[tokio::test]
async fn test_genome_lookup_failure_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GENOMES_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let err = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args_for(&ws))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::RequestFailed { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_service_error_message_is_surfaced() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"search": {"error": "No mapped genes in input list"}})),
        )
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let err = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args_for(&ws))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::MalformedResponse(ref m) if m.contains("No mapped genes")));
}

#[tokio::test]
async fn test_empty_result_still_writes_headers() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": {"result": []}})))
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let outcome = enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args_for(&ws))
        .await
        .unwrap();

    assert_eq!(outcome.total_terms, 0);
    assert!(read_table(&outcome.files.significant).unwrap().is_empty());
    assert!(read_table(&outcome.files.all).unwrap().is_empty());
}

#[tokio::test]
async fn test_csv_gene_lists_are_accepted() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .and(body_string_contains("geneInputList=Trp53%2CBrca1&"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_term_response()))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let csv_input = ws.dir.path().join("genes.csv");
    std::fs::write(&csv_input, "Trp53,Brca1\n").unwrap();

    let mut args = args_for(&ws);
    args.input = csv_input;

    enrich::run(&config_for(&server), &OntologyTable::GO_ROOTS, &args)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let server = MockServer::start().await;
    mount_genomes(&server).await;

    Mock::given(method("POST"))
        .and(path(ENRICH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_term_response()))
        .expect(2)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let config = config_for(&server);
    let args = args_for(&ws);

    let first = enrich::run(&config, &OntologyTable::GO_ROOTS, &args).await.unwrap();
    let second = enrich::run(&config, &OntologyTable::GO_ROOTS, &args).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(read_table(&second.files.all).unwrap().len(), 2);
}
