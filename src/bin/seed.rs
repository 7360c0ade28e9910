//! Seed script for development. Populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires a `DATABASE_URL` environment variable (reads .env).

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Create the tables first
    newswire::db::ensure_schema(&pool).await?;

    println!("=== newswire seed script ===");

    seed_topics(&pool).await?;
    seed_users(&pool).await?;
    seed_articles(&pool).await?;
    seed_comments(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_topics(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Topics already exist ({count})");
        return Ok(());
    }

    let topics = vec![
        ("mitch", "The man, the Mitch, the legend"),
        ("cats", "Not dogs"),
        ("paper", "what books are made of"),
    ];

    for (slug, description) in topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(slug)
            .bind(description)
            .execute(pool)
            .await?;
    }

    println!("[done] Created 3 sample topics");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Users already exist ({count})");
        return Ok(());
    }

    let users = vec![
        (
            "butter_bridge",
            "jonny",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        (
            "icellusedkars",
            "sam",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        (
            "rogersop",
            "paul",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        (
            "lurker",
            "do_nothing",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ];

    for (username, name, avatar_url) in users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(name)
            .bind(avatar_url)
            .execute(pool)
            .await?;
    }

    println!("[done] Created 4 sample users");
    Ok(())
}

async fn seed_articles(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Articles already exist ({count})");
        return Ok(());
    }

    let articles = vec![
        ("Living in the shadow of a great man", "mitch", "butter_bridge", "I find this existence challenging", 100),
        ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", "Call me Mitchell.", 0),
        ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", "some gifs", 0),
        ("Student SUES Mitch!", "mitch", "rogersop", "We all love Mitch and his wonderful, unique typing style.", 0),
        ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", "Bastet walks amongst us", 0),
        ("A", "mitch", "icellusedkars", "Delicious tin of cat food", 0),
        ("Z", "mitch", "icellusedkars", "I was hungry.", 0),
        ("Does Mitch predate civilisation?", "mitch", "icellusedkars", "Archaeologists have uncovered a gigantic statue", 0),
        ("They're not exactly dogs, are they?", "mitch", "butter_bridge", "Well? Think about it.", 0),
        ("Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", "Who are we kidding, there is only one, and it's Mitch!", 0),
        ("Am I a cat?", "mitch", "icellusedkars", "Having run out of ideas for articles, I am staring at the wall blankly, like a cat.", 0),
        ("Moustache", "mitch", "butter_bridge", "Have you seen the size of that thing?", 0),
        ("Another article about Mitch", "mitch", "butter_bridge", "There will never be enough articles about Mitch!", 0),
    ];

    // Staggered timestamps so insertion order doubles as recency order, the
    // last article inserted is the newest.
    let total = articles.len() as i32;
    for (i, (title, topic, author, body, votes)) in articles.into_iter().enumerate() {
        let age_days = total - i as i32;
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, votes, created_at, article_img_url)
             VALUES ($1, $2, $3, $4, $5, NOW() - make_interval(days => $6),
                     'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700')",
        )
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(body)
        .bind(votes)
        .bind(age_days)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {total} sample articles");
    Ok(())
}

async fn seed_comments(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Comments already exist ({count})");
        return Ok(());
    }

    // Attach every sample comment to the oldest article
    let first_article: Option<i32> = sqlx::query_scalar("SELECT MIN(article_id) FROM articles")
        .fetch_one(pool)
        .await?;

    let Some(article_id) = first_article else {
        println!("[skip] No articles to comment on");
        return Ok(());
    };

    let comments = vec![
        ("butter_bridge", "Oh, I've got compassion running out of my nose, pal!", 16),
        ("butter_bridge", "The beautiful thing about treasure is that it exists.", 14),
        ("icellusedkars", "Replacing the quiet elegance of the dark suit and tie.", 100),
        ("icellusedkars", "I hate streaming noses", 0),
        ("icellusedkars", "I hate streaming eyes even more", 0),
        ("icellusedkars", "Lobster pot", 0),
        ("icellusedkars", "Delicious crackerbreads", 0),
        ("icellusedkars", "Superficially charming", 0),
        ("icellusedkars", "Fruit pastilles", 0),
        ("rogersop", "What do you see? I have no idea where this will lead us.", 7),
        ("butter_bridge", "This morning, I showered for nine minutes.", 9),
    ];

    let total = comments.len();
    for (i, (author, body, votes)) in comments.into_iter().enumerate() {
        let age_hours = (total - i) as i32;
        sqlx::query(
            "INSERT INTO comments (article_id, author, body, votes, created_at)
             VALUES ($1, $2, $3, $4, NOW() - make_interval(hours => $5))",
        )
        .bind(article_id)
        .bind(author)
        .bind(body)
        .bind(votes)
        .bind(age_hours)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {total} sample comments on article {article_id}");
    Ok(())
}
