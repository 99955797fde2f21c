//! Controller flow tests
//!
//! Drive the presentation controller headlessly through a mock hero
//! source, covering the full pipeline: password gate, query validation,
//! lookup + normalization, tie-break selection, back navigation, and
//! export.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use printpdf::image_crate::{DynamicImage, ImageFormat};

use herodex_core::lookup::select_candidate;
use herodex_core::record::{RawBiography, RawCandidate, RawImage, RawWork};
use herodex_core::{Action, AppConfig, Controller, HeroSource, LookupError, NoticeLevel, Screen};

/// Mock hero source with canned behavior and a call counter.
struct MockSource {
    /// Candidate list the search disambiguates over; `None` echoes the
    /// query back as a fresh candidate.
    results: Option<Vec<RawCandidate>>,
    /// Portrait bytes to serve, if any.
    portrait: Option<Vec<u8>>,
    /// Number of search calls issued.
    calls: AtomicUsize,
}

impl MockSource {
    /// Every search succeeds with a candidate named after the query.
    fn echo() -> Self {
        Self {
            results: None,
            portrait: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Search disambiguates over a fixed candidate list.
    fn with_results(results: Vec<RawCandidate>) -> Self {
        Self {
            results: Some(results),
            portrait: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn with_portrait(mut self, bytes: Vec<u8>) -> Self {
        self.portrait = Some(bytes);
        self
    }

    fn search_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeroSource for MockSource {
    async fn search(&self, name: &str) -> Result<RawCandidate, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.results {
            Some(results) => select_candidate(name, results)
                .cloned()
                .ok_or_else(|| LookupError::NotFound(name.to_string())),
            None => Ok(RawCandidate {
                name: Some(name.to_string()),
                biography: Some(RawBiography {
                    place_of_birth: Some("Earth".to_string()),
                }),
                work: Some(RawWork {
                    base: Some("Mobile".to_string()),
                }),
                image: self.portrait.as_ref().map(|_| RawImage {
                    url: Some("mock://portrait".to_string()),
                }),
            }),
        }
    }

    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        self.portrait
            .clone()
            .ok_or_else(|| LookupError::NotFound(url.to_string()))
    }
}

fn test_config(export_dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.export_dir = export_dir.to_path_buf();
    config
}

fn controller(source: MockSource) -> Controller<MockSource> {
    let dir = std::env::temp_dir().join("herodex-controller-tests");
    Controller::new(source, test_config(&dir))
}

/// Unlock the gate; the default passphrase applies.
async fn unlock(controller: &mut Controller<MockSource>) {
    let notice = controller
        .handle(Action::SubmitPassword("kronos".to_string()))
        .await;
    assert!(notice.is_none());
    assert_eq!(controller.screen(), Screen::Menu);
}

fn iron_man_results() -> Vec<RawCandidate> {
    vec![RawCandidate {
        name: Some("Iron Man".to_string()),
        biography: Some(RawBiography {
            place_of_birth: Some("-".to_string()),
        }),
        work: Some(RawWork {
            base: Some("Stark Tower".to_string()),
        }),
        image: None,
    }]
}

#[tokio::test]
async fn wrong_passphrase_leaves_the_gate_closed() {
    let mut ctl = controller(MockSource::echo());

    let notice = ctl
        .handle(Action::SubmitPassword("chronos".to_string()))
        .await
        .expect("wrong passphrase should surface a notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(ctl.screen(), Screen::PasswordGate);
}

#[tokio::test]
async fn spaced_uppercase_passphrase_unlocks() {
    let mut ctl = controller(MockSource::echo());

    let notice = ctl
        .handle(Action::SubmitPassword("K R O N O S".to_string()))
        .await;
    assert!(notice.is_none());
    assert_eq!(ctl.screen(), Screen::Menu);
}

#[tokio::test]
async fn non_roster_query_is_rejected_without_a_network_call() {
    let mut ctl = controller(MockSource::echo());
    unlock(&mut ctl).await;
    ctl.handle(Action::OpenSearch).await;

    let notice = ctl
        .handle(Action::SubmitQuery("Nonexistent Hero".to_string()))
        .await
        .expect("invalid query should surface a notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(ctl.screen(), Screen::Search);
    assert_eq!(ctl.source_ref().search_calls(), 0);
}

#[tokio::test]
async fn empty_query_is_a_warning_without_a_network_call() {
    let mut ctl = controller(MockSource::echo());
    unlock(&mut ctl).await;
    ctl.handle(Action::OpenSearch).await;

    let notice = ctl
        .handle(Action::SubmitQuery("   ".to_string()))
        .await
        .expect("empty query should surface a notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(ctl.source_ref().search_calls(), 0);
}

#[tokio::test]
async fn iron_man_scenario_normalizes_the_displayed_record() {
    let mut ctl = controller(MockSource::with_results(iron_man_results()));
    unlock(&mut ctl).await;
    ctl.handle(Action::OpenSearch).await;

    let notice = ctl.handle(Action::SubmitQuery("Iron Man".to_string())).await;
    assert!(notice.is_none());
    assert_eq!(ctl.screen(), Screen::Detail);

    let record = ctl.record().expect("record should be loaded");
    assert_eq!(record.name, "IRON MAN");
    assert_eq!(record.place_of_birth, "Unknown");
    assert_eq!(record.base, "Stark Tower");
    assert!(ctl.portrait().is_none());
}

#[tokio::test]
async fn ambiguous_query_falls_back_to_the_first_candidate() {
    let results = vec![
        RawCandidate {
            name: Some("Iron Monger".to_string()),
            ..RawCandidate::default()
        },
        RawCandidate {
            name: Some("Iron Fist".to_string()),
            ..RawCandidate::default()
        },
    ];
    let mut ctl = controller(MockSource::with_results(results));
    unlock(&mut ctl).await;
    ctl.handle(Action::OpenSearch).await;

    ctl.handle(Action::SubmitQuery("Iron Man".to_string())).await;
    assert_eq!(ctl.record().unwrap().name, "IRON MONGER");
}

#[tokio::test]
async fn random_pick_lands_on_the_detail_view() {
    let mut ctl = controller(MockSource::echo());
    unlock(&mut ctl).await;

    let notice = ctl.handle(Action::PickRandom).await;
    assert!(notice.is_none());
    assert_eq!(ctl.screen(), Screen::Detail);
    assert_eq!(ctl.source_ref().search_calls(), 1);

    // The echoed name is a roster member, uppercased by normalization.
    let record = ctl.record().unwrap();
    assert!(ctl.roster().contains(&record.name));
}

#[tokio::test]
async fn back_discards_the_current_record() {
    let mut ctl = controller(MockSource::echo());
    unlock(&mut ctl).await;
    ctl.handle(Action::PickRandom).await;
    assert!(ctl.record().is_some());

    ctl.handle(Action::Back).await;
    assert_eq!(ctl.screen(), Screen::Menu);
    assert!(ctl.record().is_none());
    assert!(ctl.portrait().is_none());
}

#[tokio::test]
async fn roster_list_pick_fetches_the_entry() {
    let mut ctl = controller(MockSource::echo());
    unlock(&mut ctl).await;
    ctl.handle(Action::OpenRoster).await;
    assert_eq!(ctl.screen(), Screen::RosterList);

    ctl.handle(Action::PickEntry("Magik".to_string())).await;
    assert_eq!(ctl.screen(), Screen::Detail);
    assert_eq!(ctl.record().unwrap().name, "MAGIK");
}

#[tokio::test]
async fn export_without_a_record_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("exports");
    let mut ctl = Controller::new(MockSource::echo(), test_config(&export_dir));

    let notice = ctl
        .handle(Action::Export(None))
        .await
        .expect("export should surface a notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.body.contains("no hero record"));
    // Nothing was created, not even the export directory.
    assert!(!export_dir.exists());
}

#[tokio::test]
async fn export_writes_a_pdf_to_the_default_destination() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("exports");
    let mut ctl = Controller::new(MockSource::echo(), test_config(&export_dir));
    unlock(&mut ctl).await;
    ctl.handle(Action::PickEntry("Iron Man".to_string())).await;

    let notice = ctl
        .handle(Action::Export(None))
        .await
        .expect("export should surface a notice");
    assert_eq!(notice.level, NoticeLevel::Info);

    let written = std::fs::read(export_dir.join("IRON_MAN.pdf")).unwrap();
    assert!(written.starts_with(b"%PDF"));
}

#[tokio::test]
async fn portrait_bytes_are_decoded_and_owned_by_the_controller() {
    let image = DynamicImage::new_rgb8(3, 6);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let mut ctl = controller(MockSource::echo().with_portrait(bytes));
    unlock(&mut ctl).await;
    ctl.handle(Action::PickEntry("Storm".to_string())).await;

    let portrait = ctl.portrait().expect("portrait should be decoded");
    assert_eq!(portrait.width(), 3);
    assert_eq!(portrait.height(), 6);
}

#[tokio::test]
async fn undecodable_portrait_degrades_to_the_placeholder_path() {
    let mut ctl = controller(MockSource::echo().with_portrait(b"not an image".to_vec()));
    unlock(&mut ctl).await;
    ctl.handle(Action::PickEntry("Storm".to_string())).await;

    // Lookup still lands on Detail; only the portrait is absent.
    assert_eq!(ctl.screen(), Screen::Detail);
    assert!(ctl.record().is_some());
    assert!(ctl.portrait().is_none());
}
