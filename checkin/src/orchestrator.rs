use crate::claimer::claim_for_game;
use crate::error::Error;
use crate::limiter::Limiter;
use crate::reward::{any_success, GameResultSet};
use futures::future::try_join_all;
use hoyolab::{Credential, Game, RewardApi};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Claims every enabled game for every credential, one task per game, all
/// sharing `limiter`. Only games where at least one credential succeeded are
/// returned, in `Game` order.
pub(crate) async fn run_all<A: RewardApi>(
    api: Arc<A>,
    credentials: Arc<[Credential]>,
    lang: &str,
    limiter: &Limiter,
    disabled: &HashSet<Game>,
) -> Result<Vec<GameResultSet>, Error> {
    let games: Vec<Game> = Game::iter()
        .filter(|game| {
            let skip = disabled.contains(game);
            if skip {
                debug!("Skipping {game}");
            }
            !skip
        })
        .collect();

    let tasks = games.iter().map(|&game| {
        tokio::spawn(claim_for_game(
            Arc::clone(&api),
            Arc::clone(&credentials),
            game,
            lang.to_string(),
            limiter.clone(),
        ))
    });

    let batches = try_join_all(tasks).await?;

    Ok(games
        .into_iter()
        .zip(batches)
        .filter(|(_, rewards)| any_success(rewards))
        .map(|(game, rewards)| GameResultSet { game, rewards })
        .collect())
}
