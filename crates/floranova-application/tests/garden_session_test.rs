use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use floranova_application::{GardenSession, IdentifyOutcome};
use floranova_core::config::FloraConfig;
use floranova_core::identification::{
    CapturedImage, DiagnosedHealth, IdentificationReport, MediaCapture, PlantIdentifier,
};
use floranova_core::notification::{Notification, NotificationCenter};
use floranova_core::plant::{Emotion, HealthStatus, Plant, PlantId, PlantRegistry};
use floranova_core::user::{Plan, ScanMode, UserProfile};
use floranova_core::{FloraError, Result};

// Mock camera counting captures
#[derive(Default)]
struct MockCapture {
    captures: AtomicUsize,
}

#[async_trait]
impl MediaCapture for MockCapture {
    async fn capture(&self) -> Result<CapturedImage> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        Ok(CapturedImage::jpeg(vec![0xFF, 0xD8, 0xFF]))
    }
}

// Mock diagnosis service returning a fixed verdict
struct MockIdentifier {
    health: DiagnosedHealth,
    fail: bool,
    calls: AtomicUsize,
}

impl MockIdentifier {
    fn new(health: DiagnosedHealth) -> Self {
        Self {
            health,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(DiagnosedHealth::Healthy)
        }
    }
}

#[async_trait]
impl PlantIdentifier for MockIdentifier {
    async fn identify(
        &self,
        _image: &CapturedImage,
        mode: ScanMode,
    ) -> Result<IdentificationReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FloraError::collaborator("diagnosis service unavailable"));
        }
        Ok(IdentificationReport {
            common_name: "Monstera".to_string(),
            scientific_name: Some("Monstera deliciosa".to_string()),
            description: "Planta tropical".to_string(),
            health: self.health,
            pests: None,
            soil_analysis: None,
            light_needs: None,
            mode,
        })
    }
}

fn session_with(
    identifier: MockIdentifier,
) -> (GardenSession, Arc<MockCapture>, Arc<MockIdentifier>) {
    let capture = Arc::new(MockCapture::default());
    let identifier = Arc::new(identifier);
    let session = GardenSession::new(&FloraConfig::default(), capture.clone(), identifier.clone());
    (session, capture, identifier)
}

#[tokio::test]
async fn test_quota_then_upgrade_scenario() {
    let (mut session, capture, identifier) =
        session_with(MockIdentifier::new(DiagnosedHealth::Healthy));
    assert!(!session.user().is_pro());
    assert_eq!(session.user().scans_used(), 0);

    for _ in 0..3 {
        let outcome = session.identify(ScanMode::Health).await.unwrap();
        assert!(matches!(outcome, IdentifyOutcome::Identified(_)));
    }

    let outcome = session.identify(ScanMode::Health).await.unwrap();
    assert_eq!(outcome, IdentifyOutcome::QuotaExceeded { limit: 3 });
    assert_eq!(session.user().scans_used(), 3);
    assert_eq!(capture.captures.load(Ordering::SeqCst), 3);
    assert_eq!(identifier.calls.load(Ordering::SeqCst), 3);

    session.upgrade(Plan::Monthly);

    let outcome = session.identify(ScanMode::Health).await.unwrap();
    assert!(matches!(outcome, IdentifyOutcome::Identified(_)));
    assert_eq!(session.user().scans_used(), 3);
    assert_eq!(session.user().plan(), Some(Plan::Monthly));
}

#[tokio::test]
async fn test_locked_mode_does_not_consume_quota() {
    let (mut session, capture, _) = session_with(MockIdentifier::new(DiagnosedHealth::Healthy));

    let outcome = session.identify(ScanMode::Room).await.unwrap();
    assert_eq!(
        outcome,
        IdentifyOutcome::FeatureLocked {
            mode: ScanMode::Room
        }
    );
    assert_eq!(session.user().scans_used(), 0);
    assert_eq!(capture.captures.load(Ordering::SeqCst), 0);

    session.upgrade(Plan::Annual);
    let outcome = session.identify(ScanMode::HomeScan).await.unwrap();
    match outcome {
        IdentifyOutcome::Identified(report) => assert_eq!(report.mode, ScanMode::HomeScan),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_collaborator_failure_propagates_and_counts() {
    let (mut session, _, _) = session_with(MockIdentifier::failing());

    let err = session.identify(ScanMode::Health).await.unwrap_err();
    assert!(err.is_collaborator());
    assert_eq!(session.user().scans_used(), 1);
}

#[tokio::test]
async fn test_identify_save_and_treat() {
    let (mut session, capture, _) = session_with(MockIdentifier::new(DiagnosedHealth::Sick));

    let IdentifyOutcome::Identified(report) = session.identify(ScanMode::Health).await.unwrap()
    else {
        panic!("scan should be allowed");
    };
    let saved = session
        .save_identification(&report, "img://monstera")
        .unwrap();
    assert_eq!(saved.id, 1);
    assert!(saved.is_quarantined);
    assert_eq!(session.plants().list_quarantined().len(), 1);
    assert!(session.plants().list_healthy().is_empty());
    assert_eq!(session.snapshot().quarantined_plants, vec![saved.clone()]);

    let treated = session.treat_with_photo(saved.id).await.unwrap();
    assert_eq!(treated.health.status, HealthStatus::Ok);
    assert_eq!(treated.emotion, Emotion::Happy);
    assert!(!treated.is_quarantined);
    assert_eq!(session.plants().list_healthy().len(), 1);
    assert!(session.plants().list_quarantined().is_empty());
    // one capture for the scan, one for the progress photo
    assert_eq!(capture.captures.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_treat_unknown_plant_skips_capture() {
    let (mut session, capture, _) = session_with(MockIdentifier::new(DiagnosedHealth::Healthy));

    let err = session.treat_with_photo(42).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(capture.captures.load(Ordering::SeqCst), 0);
    assert!(session.plants().is_empty());
}

#[tokio::test]
async fn test_notifications_and_profile() {
    let (session, _, _) = session_with(MockIdentifier::new(DiagnosedHealth::Healthy));
    let mut session = session.with_stores(
        PlantRegistry::new(),
        NotificationCenter::from_notifications([
            Notification::new(1, "Riego", "Tu Monstera tiene sed", "Hace 5m")
                .with_screen("my_trees"),
            Notification::new(2, "Ranking", "Subiste al puesto 4", "Hace 1h"),
        ]),
    );
    assert_eq!(session.snapshot().unread_count, 2);

    session.mark_all_notifications_read();
    assert_eq!(session.notifications().unread_count(), 0);

    session.push_notification(Notification::new(3, "Clima", "Lluvia mañana", "Ahora"));
    assert_eq!(session.snapshot().unread_count, 1);

    assert!(session.update_profile(UserProfile::new("")).is_err());
    session.update_profile(UserProfile::new("Alex Morgan")).unwrap();
    assert_eq!(session.user().name(), "Alex Morgan");

    session.user_mut().increment_streak();
    assert_eq!(session.snapshot().streak, 1);
}

#[tokio::test]
async fn test_save_identification_fails_when_ids_exhausted() {
    let (mut session, _, _) = session_with(MockIdentifier::new(DiagnosedHealth::Healthy));
    session.upsert_plant(Plant::new(PlantId::MAX, "Cactus", "Cactaceae"));

    let IdentifyOutcome::Identified(report) = session.identify(ScanMode::Health).await.unwrap()
    else {
        panic!("scan should be allowed");
    };
    let err = session
        .save_identification(&report, "img://cactus")
        .unwrap_err();
    assert!(matches!(err, FloraError::Internal(_)));
    assert_eq!(session.plants().len(), 1);
}
