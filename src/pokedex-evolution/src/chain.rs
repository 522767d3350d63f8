//! Chain walking.

use pokedex_api::ChainLink;
use tracing::debug;

/// Names from the root to the first leaf, following `evolves_to[0]` at every
/// level. Sibling branches are not explored.
pub fn walk_first_branch(root: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = Some(root);

    while let Some(link) = current {
        if link.branch_count() > 1 {
            debug!(
                species = %link.species.name,
                branches = link.branch_count(),
                "Following first evolution branch only"
            );
        }
        names.push(link.species.name.clone());
        current = link.evolves_to.first();
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api::NamedResource;

    fn link(name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedResource {
                name: name.to_string(),
                url: String::new(),
            },
            evolves_to,
        }
    }

    #[test]
    fn test_single_member_chain() {
        assert_eq!(walk_first_branch(&link("tauros", vec![])), vec!["tauros"]);
    }

    #[test]
    fn test_linear_chain() {
        let chain = link(
            "bulbasaur",
            vec![link("ivysaur", vec![link("venusaur", vec![])])],
        );
        assert_eq!(
            walk_first_branch(&chain),
            vec!["bulbasaur", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_branching_chain_takes_first_successor() {
        let chain = link(
            "oddish",
            vec![
                link("gloom", vec![link("vileplume", vec![]), link("bellossom", vec![])]),
                link("unused", vec![]),
            ],
        );
        assert_eq!(
            walk_first_branch(&chain),
            vec!["oddish", "gloom", "vileplume"]
        );
    }

    #[test]
    fn test_deep_chain_is_not_bounded() {
        let mut chain = link("n0", vec![]);
        for i in 1..200 {
            chain = link(&format!("n{i}"), vec![chain]);
        }
        let names = walk_first_branch(&chain);
        assert_eq!(names.len(), 200);
        assert_eq!(names.first().map(String::as_str), Some("n199"));
        assert_eq!(names.last().map(String::as_str), Some("n0"));
    }
}
