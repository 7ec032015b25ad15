use crate::app::{AppContext, BoardError, Result};
use crate::domain::{NewComment, NewFeed};

pub async fn list(ctx: &AppContext) -> Result<()> {
    let feeds = ctx.api.list_feeds().await?;

    if feeds.is_empty() {
        println!("No posts yet");
        return Ok(());
    }

    for feed in &feeds {
        println!("#{} {} ({})", feed.id, feed.name, feed.created_local());
        for line in feed.content.lines() {
            println!("  {}", line);
        }

        // A failed comment fetch only affects this post's listing.
        match ctx.api.list_comments(feed.id).await {
            Ok(mut comments) => {
                comments.sort_by_key(|c| c.order);
                for comment in &comments {
                    println!("    #{} {}", comment.order, comment.content);
                }
            }
            Err(e) => {
                eprintln!("    (comments unavailable: {})", e);
            }
        }
        println!();
    }

    Ok(())
}

pub async fn post(ctx: &AppContext, name: &str, content: &str) -> Result<()> {
    let errors = NewFeed::validate(name, content);
    if !errors.is_empty() {
        let message = [errors.name, errors.content]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        return Err(BoardError::InvalidInput(message));
    }

    let feed = ctx.api.create_feed(&NewFeed::new(name, content)).await?;
    println!("Created post #{}: {}", feed.id, feed.name);
    Ok(())
}

pub async fn comment(ctx: &AppContext, feed_id: i64, content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(BoardError::InvalidInput(
            "Comment text must not be empty".to_string(),
        ));
    }

    let created = ctx
        .api
        .create_comment(feed_id, &NewComment::new(content))
        .await?;
    println!("Added comment #{} to post #{}", created.order, feed_id);
    Ok(())
}
