use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use common::{
    Article, DEFAULT_AUTHOR, MemoryStore, Project, ProjectStatus, ProjectType, StoreError,
};
use tracing::info;
use uuid::Uuid;

const OVERFITTING_BODY: &str = r#"# Why Your Neural Network is Probably Overfitting (And Other Life Lessons)

That network hitting 99.9% accuracy on the training set? It is probably overfitting.

## The Signs You're In Denial

1. **Training accuracy is suspiciously high.** Either you built AGI or you are overfitting.
2. **Validation loss climbs while training loss falls.** That is not a feature.
3. **The model memorized the training data.** Pixel 47,231 should not predict lunch.

## How to Fix It (Without Therapy)

- **Regularization**: meditation for your weights.
- **Dropout**: selective hearing, for neurons.
- **Early stopping**: know when to quit.
- **More data**: the answer to most ML problems, and most life problems.

*Next week: "Why Your Gradient is Vanishing (And How to Find It Again)"*"#;

const NOTEBOOK_BODY: &str = r#"# From Jupyter Notebooks to Production: A Survival Guide

"It works in my notebook" is where the journey starts, not where it ends.

## Stage 1: Denial

A notebook is a nature preserve for code. Production is the wild west.

## Stage 2: The Refactoring Nightmare

Forty-seven exploratory cells become functions, and you find variables defined
twenty cells ago, magic numbers, and cells that only work in one order.

## Stage 3: Containerization

```dockerfile
FROM python:3.9-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
CMD ["uvicorn", "main:app", "--host", "0.0.0.0", "--port", "8000"]
```

## Survival Tips

1. **Version everything**: code, data, models.
2. **Test everything**: unit, integration, sanity.
3. **Monitor everything**: latency, drift, error rates.

*Coming up next: "Why Your Model Works in Production but Not in the Demo"*"#;

const CHURN_BODY: &str = r#"# Customer Churn Prediction System

## The Problem

A telecom client was losing customers and needed to spot likely churners early
enough to act.

## The Approach

A pipeline over usage statistics, contract type, tenure, and support history,
with a Random Forest as the primary model and XGBoost for comparison, validated
with time-series cross-validation to avoid leakage.

## Results

- **94% accuracy** on the held-out set
- **$2M annual savings** from targeted retention
- **35% lower churn** among high-risk customers

## Lessons Learned

Data quality mattered more than model choice, and a prediction is only useful
if the business can act on it."#;

const MUSIC_BODY: &str = r#"# AI Music Recommender: Because Spotify Wasn't Weird Enough

## The Motivation

A recommender that understands a uniquely questionable taste in music.

## The Approach

1. **Collaborative filtering** with SVD: decent, but suffers from cold start.
2. **Content-based filtering** on audio features: better for new users.
3. **Hybrid model** combining embeddings with content features in TensorFlow.

## Results

- **Precision@10**: 0.15 (better than random!)
- Occasionally recommends death metal to grandparents.

## Future Improvements

Multi-armed bandits, session-aware sequence models, and real-time updates from
skips and likes."#;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

// Evaluated at compile time, so a bad date fails the build.
const OVERFITTING_PUBLISHED: NaiveDate = date(2023, 12, 15);
const NOTEBOOK_PUBLISHED: NaiveDate = date(2023, 12, 8);
const CHURN_CREATED: NaiveDate = date(2023, 6, 15);
const MUSIC_CREATED: NaiveDate = date(2023, 9, 1);

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: Uuid::from_u128(1),
            slug: "neural-network-overfitting-life-lessons".into(),
            title: "Why Your Neural Network is Probably Overfitting (And Other Life Lessons)"
                .into(),
            excerpt: "A deep dive into the most common pitfalls in machine learning model development. Spoiler: your model isn't as smart as you think it is.".into(),
            content: OVERFITTING_BODY.into(),
            category: "Machine Learning".into(),
            tags: strings(&["overfitting", "neural-networks", "debugging"]),
            author: DEFAULT_AUTHOR.into(),
            published_at: midnight(OVERFITTING_PUBLISHED),
            read_time: "5 min read".into(),
        },
        Article {
            id: Uuid::from_u128(2),
            slug: "jupyter-notebooks-to-production-survival-guide".into(),
            title: "From Jupyter Notebooks to Production: A Survival Guide".into(),
            excerpt: "The journey from 'it works in my notebook' to 'it actually serves users' is filled with tears and Dockerfiles.".into(),
            content: NOTEBOOK_BODY.into(),
            category: "Career".into(),
            tags: strings(&["production", "mlops", "deployment"]),
            author: DEFAULT_AUTHOR.into(),
            published_at: midnight(NOTEBOOK_PUBLISHED),
            read_time: "8 min read".into(),
        },
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: Uuid::from_u128(1),
            slug: "customer-churn-prediction".into(),
            title: "Customer Churn Prediction".into(),
            description: "A model that predicts customer churn with 94% accuracy, saving $2M annually by identifying at-risk customers.".into(),
            content: CHURN_BODY.into(),
            kind: ProjectType::Professional,
            status: ProjectStatus::Completed,
            technologies: strings(&[
                "Python",
                "Scikit-learn",
                "PostgreSQL",
                "Docker",
                "AWS SageMaker",
            ]),
            // Proprietary
            github_url: None,
            live_url: None,
            image_url: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=400&h=240".into()),
            created_at: midnight(CHURN_CREATED),
        },
        Project {
            id: Uuid::from_u128(2),
            slug: "ai-music-recommender".into(),
            title: "AI Music Recommender".into(),
            description: "Because Spotify's algorithm wasn't weird enough. A recommender that understands a terrible taste in music.".into(),
            content: MUSIC_BODY.into(),
            kind: ProjectType::Personal,
            status: ProjectStatus::Working,
            technologies: strings(&[
                "Python",
                "Spotify API",
                "Flask",
                "Collaborative Filtering",
                "TensorFlow",
            ]),
            github_url: Some("https://github.com/alexchen/music-recommender".into()),
            live_url: Some("https://music-rec.alexchen.dev".into()),
            image_url: Some("https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?auto=format&fit=crop&w=400&h=240".into()),
            created_at: midnight(MUSIC_CREATED),
        },
    ]
}

/// Load the bundled sample articles and projects into `store`.
pub fn seed_sample_content(store: &MemoryStore) -> Result<(), StoreError> {
    let articles = sample_articles();
    let projects = sample_projects();
    let (article_count, project_count) = (articles.len(), projects.len());

    for article in articles {
        store.import_article(article)?;
    }
    for project in projects {
        store.import_project(project)?;
    }

    info!(
        articles = article_count,
        projects = project_count,
        "Seeded sample content"
    );
    Ok(())
}
