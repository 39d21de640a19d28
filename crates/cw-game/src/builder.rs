//! Fluent builder for constructing a [`Game`].

use cw_agent::{Agent, Strategy};
use cw_core::{AgentId, CityId, GameConfig, Turn};
use cw_map::Map;

use crate::{Game, GameError, GameResult};

/// Everything needed to place one agent on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentSpec {
    pub name:        String,
    pub start:       CityId,
    pub max_stamina: u32,
    pub strategy:    Strategy,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, start: CityId, max_stamina: u32, strategy: Strategy) -> Self {
        Self { name: name.into(), start, max_stamina, strategy }
    }
}

/// Fluent builder for [`Game<'m>`].
///
/// Agents take their turns in the order they are added, and agent `i` gets
/// `AgentId(i)` for RNG seeding.
///
/// # Example
///
/// ```rust,ignore
/// let mut game = GameBuilder::new(&map, GameConfig::default())
///     .agent(AgentSpec::new("Thief", CityId(0), 30, Strategy::Random))
///     .agent(AgentSpec::new("D1", CityId(4), 40, Strategy::DepthFirstSearch))
///     .build()?;
/// game.run(&mut NoopObserver);
/// ```
pub struct GameBuilder<'m> {
    map:    &'m Map,
    config: GameConfig,
    specs:  Vec<AgentSpec>,
}

impl<'m> GameBuilder<'m> {
    pub fn new(map: &'m Map, config: GameConfig) -> Self {
        Self { map, config, specs: Vec::new() }
    }

    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Validate the configuration and agent placements and return a
    /// ready-to-run [`Game`].
    pub fn build(self) -> GameResult<Game<'m>> {
        self.config.validate()?;
        if self.specs.is_empty() {
            return Err(GameError::NoAgents);
        }

        let agents = self
            .specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                Agent::new(self.map, spec.start, spec.max_stamina, spec.strategy, spec.name.clone())
                    .map(|a| a.seeded(AgentId(i as u32), self.config.seed))
                    .map_err(|source| GameError::Agent { name: spec.name, source })
            })
            .collect::<GameResult<Vec<_>>>()?;

        Ok(Game {
            map: self.map,
            config: self.config,
            agents,
            turn: Turn::ZERO,
        })
    }
}
