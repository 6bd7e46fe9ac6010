//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, bail};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use bizdocs_client::{BackendClient, SavedDocument, SettingsCache};
use bizdocs_core::document::{DocumentDraft, DocumentKind};
use bizdocs_core::render::{DocumentRenderer, PageLayout, Printable, TextRenderer};
use bizdocs_core::settings::{CompanySettings, TaxDefaults};
use bizdocs_core::summary::SummaryPolicy;
use bizdocs_core::withholding::WhtCertificate;
use bizdocs_shared::types::DocumentId;
use bizdocs_shared::{AppConfig, AppError};

/// Configuration and backend handles shared by all subcommands.
pub(crate) struct Context {
    config: AppConfig,
    policy: SummaryPolicy,
    offline: bool,
    client: BackendClient,
    settings: SettingsCache,
}

impl Context {
    pub(crate) fn new(config: AppConfig, offline: bool) -> anyhow::Result<Self> {
        let client = BackendClient::new(&config.backend).map_err(AppError::from)?;
        let settings = SettingsCache::new(client.clone(), config.tax.settings_ttl_secs);

        Ok(Self {
            policy: SummaryPolicy::from(&config.summary),
            config,
            offline,
            client,
            settings,
        })
    }

    async fn default_vat_rate(&self) -> Decimal {
        let configured = self.config.tax.default_vat_rate;
        if self.offline {
            return configured;
        }
        self.settings.vat_rate(configured).await
    }

    async fn company(&self) -> CompanySettings {
        if self.offline {
            return CompanySettings::default();
        }
        match self.settings.current().await {
            Ok(settings) => (*settings).clone(),
            Err(e) => {
                warn!(error = %e, "Company settings unavailable, printing without letterhead");
                CompanySettings::default()
            }
        }
    }

    fn require_backend(&self, action: &str) -> anyhow::Result<()> {
        if self.offline {
            bail!("{action} needs the backend; run without --offline");
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `bizdocs summary`
pub(crate) async fn summary(
    ctx: &Context,
    file: &Path,
    vat_rate: Option<Decimal>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let draft: DocumentDraft = read_json(file)?;
    let default_vat = match vat_rate {
        Some(rate) => rate,
        None => ctx.default_vat_rate().await,
    };

    let summary = draft
        .summary(default_vat, ctx.policy)
        .rounded(ctx.policy.rounding);
    write_json(out, &summary)
}

/// `bizdocs print`
pub(crate) async fn print(
    ctx: &Context,
    file: &Path,
    page_lines: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let draft: DocumentDraft = read_json(file)?;
    let company = ctx.company().await;
    let defaults = TaxDefaults::resolve(Some(&company), ctx.default_vat_rate().await);
    let summary = draft.summary(defaults.vat_rate, ctx.policy);

    let layout = PageLayout {
        page_lines,
        ..PageLayout::default()
    };
    let mut renderer = TextRenderer::with_layout(&mut *out, layout);
    renderer.render(&Printable::Document {
        draft: &draft,
        summary: &summary,
        company: &company,
    })?;
    info!(number = %draft.number, pages = renderer.pages(), "Printed document");
    Ok(())
}

/// `bizdocs certificate`
pub(crate) fn certificate(
    ctx: &Context,
    file: &Path,
    print: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let certificate: WhtCertificate = read_json(file)?;

    if print {
        let totals = certificate.totals();
        let mut renderer = TextRenderer::new(&mut *out);
        renderer.render(&Printable::Certificate {
            certificate: &certificate,
            totals: &totals,
        })?;
        return Ok(());
    }

    let payload = certificate.to_payload(ctx.policy.rounding)?;
    write_json(out, &payload)
}

/// `bizdocs save`
pub(crate) async fn save(
    ctx: &Context,
    file: &Path,
    id: Option<&str>,
    is_certificate: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    ctx.require_backend("save")?;
    let id = id
        .map(str::parse::<DocumentId>)
        .transpose()
        .context("Invalid document ID")?;

    let saved = if is_certificate {
        let certificate: WhtCertificate = read_json(file)?;
        let payload = certificate.to_payload(ctx.policy.rounding)?;
        upsert(ctx, DocumentKind::WithholdingTax, id.or(certificate.id), &payload).await?
    } else {
        let draft: DocumentDraft = read_json(file)?;
        let payload = draft.to_payload(ctx.default_vat_rate().await, ctx.policy)?;
        upsert(ctx, draft.kind, id.or(draft.id), &payload).await?
    };

    info!(id = %saved.id, "Saved");
    write_json(out, &saved)
}

async fn upsert<P: Serialize>(
    ctx: &Context,
    kind: DocumentKind,
    id: Option<DocumentId>,
    payload: &P,
) -> Result<SavedDocument, AppError> {
    let result = match id {
        Some(id) => ctx.client.update_document(kind, id, payload).await,
        None => ctx.client.create_document(kind, payload).await,
    };
    result.map_err(AppError::from)
}

/// `bizdocs settings`
pub(crate) async fn settings(ctx: &Context, refresh: bool, out: &mut impl Write) -> anyhow::Result<()> {
    ctx.require_backend("settings")?;
    let settings = if refresh {
        ctx.settings.refresh().await
    } else {
        ctx.settings.current().await
    }
    .map_err(AppError::from)?;

    write_json(out, &*settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn offline() -> Context {
        Context::new(AppConfig::default(), true).unwrap()
    }

    /// JSON file in the temp directory, removed when dropped.
    struct Fixture(PathBuf);

    impl Fixture {
        fn new(name: &str, body: &str) -> Self {
            let path = std::env::temp_dir().join(format!("bizdocs-{}-{name}", std::process::id()));
            std::fs::write(&path, body).unwrap();
            Self(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    const INVOICE: &str = r#"{
        "kind": "invoice",
        "number": "INV-2026-0001",
        "issuedOn": "2026-03-15",
        "party": {"name": "Bangkok Foods"},
        "items": [
            {"description": "A", "quantity": 2, "unitPrice": 100},
            {"description": "B", "quantity": 1, "unitPrice": 50}
        ],
        "discountRate": 10
    }"#;

    const CERTIFICATE: &str = r#"{
        "number": "7",
        "issuedOn": "2026-02-28",
        "payer": {"name": "Siam Trading", "taxId": "0105556000009"},
        "payee": {"name": "Somchai Jaidee", "taxId": "1234567890121"},
        "lines": [
            {"incomeType": "40(8)", "paidOn": "2026-02-28", "amount": 10000},
            {"incomeType": "40(5)", "paidOn": "2026-02-28", "amount": "5000"}
        ]
    }"#;

    #[tokio::test]
    async fn summary_offline_uses_configured_vat() {
        let file = Fixture::new("summary.json", INVOICE);
        let mut out = Vec::new();

        summary(&offline(), file.path(), None, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["subtotal"], serde_json::json!(250.0));
        assert_eq!(value["vatRate"], serde_json::json!(7.0));
        assert_eq!(value["grandTotal"], serde_json::json!(240.75));
    }

    #[tokio::test]
    async fn summary_vat_override() {
        let file = Fixture::new("summary-zero.json", INVOICE);
        let mut out = Vec::new();

        summary(&offline(), file.path(), Some(Decimal::ZERO), &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["grandTotal"], serde_json::json!(225.0));
    }

    #[tokio::test]
    async fn print_offline_renders_text() {
        let file = Fixture::new("print.json", INVOICE);
        let mut out = Vec::new();

        print(&offline(), file.path(), 60, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INV-2026-0001"));
        assert!(text.contains("240.75"));
    }

    #[test]
    fn certificate_payload_json() {
        let file = Fixture::new("certificate.json", CERTIFICATE);
        let mut out = Vec::new();

        certificate(&offline(), file.path(), false, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["totalAmount"], serde_json::json!(15000.0));
        assert_eq!(value["totalTax"], serde_json::json!(550.0));
        assert_eq!(value["netPayable"], serde_json::json!(14450.0));
    }

    #[test]
    fn certificate_invalid_is_error() {
        let file = Fixture::new("certificate-bad.json", &CERTIFICATE.replace("1234567890121", "1234567890123"));
        let err = certificate(&offline(), file.path(), false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("payee"));
    }

    #[tokio::test]
    async fn save_requires_backend() {
        let file = Fixture::new("save.json", INVOICE);
        let err = save(&offline(), file.path(), None, false, &mut Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--offline"));
    }

    #[test]
    fn fixture_is_removed_on_drop() {
        let file = Fixture::new("dropped.json", "{}");
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_is_error() {
        let err = certificate(&offline(), Path::new("/nonexistent/cert.json"), false, &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
