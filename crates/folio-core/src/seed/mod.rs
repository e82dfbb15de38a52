//! Sample data seeding
//!
//! Replaces the project table contents with a small set of showcase
//! projects, so a fresh deployment has something to render.

use crate::error::{Error, Result};
use crate::media::MediaStore;
use crate::project::{Category, ProjectDraft, ProjectRepository};
use crate::storage::Database;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use tracing::info;

/// Seed the store with sample projects, wiping whatever is there
///
/// Returns the number of projects created.
pub async fn seed(db: &Database, media: &MediaStore) -> Result<usize> {
    let repo = ProjectRepository::new(db);
    repo.delete_all().await?;

    let samples = sample_projects();
    let count = samples.len();

    for sample in samples {
        let png = placeholder_png(sample.color)?;
        let mut draft = sample.draft;
        draft.image = media.store_image(&format!("{}.png", sample.slug), &png)?;

        let project = repo.create(&draft).await?;
        info!(id = project.id, title = %project.title, "Created project");
    }

    info!(count, "Seeded sample projects");
    Ok(count)
}

struct SampleProject {
    slug: &'static str,
    color: [u8; 3],
    draft: ProjectDraft,
}

fn sample_projects() -> Vec<SampleProject> {
    vec![
        SampleProject {
            slug: "payment-system",
            color: [31, 111, 235],
            draft: ProjectDraft {
                title: "Distributed Payment System".to_string(),
                category: Category::WebDev,
                short_summary: "High-throughput payment processing engine handling millions of transactions with 99.99% uptime.".to_string(),
                role: "Lead Backend Engineer".to_string(),
                year: 2024,
                stack: "GOLANG KAFKA REDIS".to_string(),
                repository: Some("https://github.com/example/payment-system".to_string()),
                challenge: "The previous monolithic architecture struggled to handle peak loads during holiday sales, resulting in transaction failures and latency spikes. We needed a system capable of processing 50k TPS with strict consistency guarantees.".to_string(),
                key_features: "Idempotent transaction processing\nEvent-driven architecture\nAutomated reconciliation\nReal-time fraud detection".to_string(),
                description: "We chose Go for its high concurrency capabilities and low memory footprint. The core payment engine was designed as a set of microservices communicating via Kafka topics, ensuring loose coupling and high availability.\n\nTo ensure data consistency across distributed services, we implemented the Saga Pattern. Each step of the payment process (validation, authorization, ledger update) publishes an event. If any step fails, compensating transactions are triggered to roll back changes.".to_string(),
                image: String::new(),
            },
        },
        SampleProject {
            slug: "cloud-migration",
            color: [163, 113, 247],
            draft: ProjectDraft {
                title: "Cloud Migration API".to_string(),
                category: Category::SysDesign,
                short_summary: "Automated migration toolset for legacy databases to cloud-native managed services.".to_string(),
                role: "Cloud Architect".to_string(),
                year: 2023,
                stack: "PYTHON AWS TERRAFORM".to_string(),
                repository: None,
                challenge: "Legacy on-premise databases needed migration to cloud with zero downtime and data integrity guarantees. The challenge was handling 10TB+ of data across multiple databases.".to_string(),
                key_features: "Zero-downtime migration\nData validation pipeline\nRollback capabilities\nProgress monitoring dashboard".to_string(),
                description: "Built a comprehensive migration framework using Python that orchestrates the entire migration process. The system uses AWS DMS for continuous replication while validating data integrity at each step.\n\nImplemented infrastructure as code with Terraform to provision cloud resources consistently. Created automated testing suite to verify data consistency post-migration.".to_string(),
                image: String::new(),
            },
        },
        SampleProject {
            slug: "analytics-engine",
            color: [240, 136, 62],
            draft: ProjectDraft {
                title: "Real-time Analytics Engine".to_string(),
                category: Category::SysDesign,
                short_summary: "Stream processing pipeline for analyzing user behavior in real-time.".to_string(),
                role: "Senior Backend Engineer".to_string(),
                year: 2023,
                stack: "RUST FLINK CLICKHOUSE".to_string(),
                repository: Some("https://github.com/example/analytics-engine".to_string()),
                challenge: "Need to process billions of events daily with sub-second latency for real-time dashboards and alerting. Traditional batch processing was too slow for business requirements.".to_string(),
                key_features: "Stream processing with Apache Flink\nSub-second query latency\nCustom aggregation functions\nReal-time alerting system".to_string(),
                description: "Designed and implemented a real-time analytics pipeline using Apache Flink for stream processing. Events are ingested from Kafka, processed in-memory, and stored in ClickHouse for analytical queries.\n\nOptimized query performance by implementing materialized views and pre-aggregations. The system handles 100k+ events per second with p99 latency under 500ms.".to_string(),
                image: String::new(),
            },
        },
    ]
}

/// A small solid-color PNG used as the hero image for seeded projects
fn placeholder_png(color: [u8; 3]) -> Result<Vec<u8>> {
    let img = RgbImage::from_pixel(640, 360, Rgb(color));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Media(format!("failed to encode placeholder image: {e}")))?;
    Ok(bytes)
}
