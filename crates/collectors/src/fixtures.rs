//! In-memory collaborator fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use payload::{
    ArtifactHandle, ArtifactManager, AuditLog, Auditor, DataProvider, GlobalVariable,
    LogAccessError, LogAccessor, LogAccessorFactory, LogKind, LogLine, PlanKey, PlanResultKey,
    Report, ReportParseError, ReportParser, ResultsCache, ResultsContainer, VariableStore,
};

// ---------------------------------------------------------------------------
// Audit log
// ---------------------------------------------------------------------------

/// Records every audit line for assertions.
#[derive(Default)]
pub struct RecordingAudit {
    lines: Mutex<Vec<(String, bool)>>,
}

impl RecordingAudit {
    /// Returns a recording log plus an [`Auditor`] bound to a fixed plan.
    pub fn with_auditor() -> (Arc<Self>, Auditor) {
        let log = Arc::new(Self::default());
        let auditor = Auditor::new(log.clone(), PlanKey::new("PROJECT-PLAN"));
        (log, auditor)
    }

    pub fn infos(&self) -> Vec<String> {
        self.filtered(false)
    }

    pub fn errors(&self) -> Vec<String> {
        self.filtered(true)
    }

    fn filtered(&self, errors: bool) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, is_error)| *is_error == errors)
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl AuditLog for RecordingAudit {
    fn append(&self, _plan: &PlanKey, message: &str, is_error: bool) {
        self.lines
            .lock()
            .unwrap()
            .push((message.to_owned(), is_error));
    }
}

// ---------------------------------------------------------------------------
// Variable store
// ---------------------------------------------------------------------------

pub struct FakeVariables {
    variables: Vec<GlobalVariable>,
}

impl FakeVariables {
    pub fn new(variables: Vec<GlobalVariable>) -> Self {
        Self { variables }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Store holding the secret variable with the given value.
    pub fn with_secret(value: &str) -> Self {
        Self::new(vec![GlobalVariable {
            key: crate::secret::SECRET_VARIABLE_KEY.to_owned(),
            value: value.to_owned(),
        }])
    }
}

impl VariableStore for FakeVariables {
    fn global_variables(&self) -> Vec<GlobalVariable> {
        self.variables.clone()
    }
}

// ---------------------------------------------------------------------------
// Results cache
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeResults {
    containers: HashMap<String, ResultsContainer>,
}

impl FakeResults {
    pub fn with(mut self, key: &str, container: ResultsContainer) -> Self {
        self.containers.insert(key.to_owned(), container);
        self
    }
}

impl ResultsCache for FakeResults {
    fn lookup(&self, key: &PlanResultKey) -> Option<ResultsContainer> {
        self.containers.get(key.as_str()).cloned()
    }
}

// ---------------------------------------------------------------------------
// Log accessor
// ---------------------------------------------------------------------------

pub fn log_line(text: &str) -> LogLine {
    LogLine {
        text: text.to_owned(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap(),
    }
}

struct FakeLogsInner {
    lines: Option<Vec<LogLine>>,
    last_request: Mutex<Option<(usize, Vec<LogKind>)>>,
}

pub struct FakeLogs {
    inner: Arc<FakeLogsInner>,
}

impl FakeLogs {
    pub fn with_lines(lines: Vec<LogLine>) -> Self {
        Self {
            inner: Arc::new(FakeLogsInner {
                lines: Some(lines),
                last_request: Mutex::new(None),
            }),
        }
    }

    /// Factory whose `open` fails, simulating a missing log file.
    pub fn failing() -> Self {
        Self {
            inner: Arc::new(FakeLogsInner {
                lines: None,
                last_request: Mutex::new(None),
            }),
        }
    }

    /// The `(n, kinds)` arguments of the most recent `last_n` call.
    pub fn last_request(&self) -> Option<(usize, Vec<LogKind>)> {
        self.inner.last_request.lock().unwrap().clone()
    }
}

impl LogAccessorFactory for FakeLogs {
    fn open(&self, key: &PlanResultKey) -> Result<Box<dyn LogAccessor>, LogAccessError> {
        if self.inner.lines.is_none() {
            return Err(LogAccessError::NotFound(key.to_string()));
        }
        Ok(Box::new(FakeAccessor {
            inner: self.inner.clone(),
        }))
    }
}

struct FakeAccessor {
    inner: Arc<FakeLogsInner>,
}

impl LogAccessor for FakeAccessor {
    fn last_n(&self, n: usize, kinds: &[LogKind]) -> Result<Vec<LogLine>, LogAccessError> {
        *self.inner.last_request.lock().unwrap() = Some((n, kinds.to_vec()));
        let lines = self.inner.lines.clone().unwrap_or_default();
        Ok(lines.into_iter().rev().take(n).rev().collect())
    }
}

// ---------------------------------------------------------------------------
// Artifact manager + report parser
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeArtifacts {
    providers: HashMap<String, DataProvider>,
}

impl FakeArtifacts {
    pub fn file_backed(mut self, handle: &str, path: &Path) -> Self {
        self.providers
            .insert(handle.to_owned(), DataProvider::FileBacked(path.to_owned()));
        self
    }

    pub fn unsupported(mut self, handle: &str, kind: &str) -> Self {
        self.providers.insert(
            handle.to_owned(),
            DataProvider::Unsupported(kind.to_owned()),
        );
        self
    }
}

impl ArtifactManager for FakeArtifacts {
    fn data_provider(&self, handle: &ArtifactHandle) -> Option<DataProvider> {
        self.providers.get(handle.as_str()).cloned()
    }
}

type ErrorFactory = Box<dyn Fn() -> ReportParseError + Send + Sync>;

/// Parser producing `{"label": <label>}` documents, with per-label failure
/// injection.
#[derive(Default)]
pub struct FakeParser {
    failures: HashMap<String, ErrorFactory>,
}

impl FakeParser {
    pub fn labelled() -> Self {
        Self::default()
    }

    pub fn failing_on(
        mut self,
        label: &str,
        error: impl Fn() -> ReportParseError + Send + Sync + 'static,
    ) -> Self {
        self.failures.insert(label.to_owned(), Box::new(error));
        self
    }
}

impl ReportParser for FakeParser {
    fn parse(&self, _file: &Path, label: &str) -> Result<Report, ReportParseError> {
        if let Some(factory) = self.failures.get(label) {
            return Err(factory());
        }
        Ok(Report(serde_json::json!({ "label": label })))
    }
}
