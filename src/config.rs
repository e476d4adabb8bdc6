/// How `advance` treats a step that would leave the interior or land on
/// the snake's own body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Such steps are ignored, so the player can never reach an illegal state.
    #[default]
    Contained,
    /// Such steps are applied and the game ends once the state is illegal.
    Permissive,
}

/// Configuration for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the grid, border included
    pub grid_width: i32,
    /// Height of the grid, border included
    pub grid_height: i32,
    pub policy: MovePolicy,
    /// Fixed seed for cherry placement. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 80,
            grid_height: 24,
            policy: MovePolicy::Contained,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of playable cells inside the border
    pub fn interior_area(&self) -> usize {
        let w = self.grid_width.saturating_sub(2).max(0) as usize;
        let h = self.grid_height.saturating_sub(2).max(0) as usize;
        w.saturating_mul(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 80);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.policy, MovePolicy::Contained);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new(20, 10)
            .with_policy(MovePolicy::Permissive)
            .with_seed(7);
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.policy, MovePolicy::Permissive);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_interior_area() {
        assert_eq!(GameConfig::default().interior_area(), 78 * 22);
        assert_eq!(GameConfig::new(2, 2).interior_area(), 0);
        assert_eq!(GameConfig::new(1, 10).interior_area(), 0);
        assert_eq!(GameConfig::new(i32::MIN, 10).interior_area(), 0);
        assert_eq!(GameConfig::new(10, i32::MIN).interior_area(), 0);
    }
}
