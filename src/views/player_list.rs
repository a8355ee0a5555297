// ============================================================================
// PLAYER LIST VIEW - Contenido completo de la región lista
// ============================================================================

use crate::models::Player;
use crate::utils::constants::EMPTY_ROSTER_MESSAGE;
use crate::views::node::ViewNode;
use crate::views::player_card::render_player_card;

/// Contenido de reemplazo para la región lista: una card por jugador,
/// o un único placeholder si el roster está vacío.
pub fn render_player_list(players: &[Player]) -> Vec<ViewNode> {
    if players.is_empty() {
        return vec![ViewNode::new("h3").text(EMPTY_ROSTER_MESSAGE)];
    }

    players.iter().map(render_player_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::node::Action;

    fn roster() -> Vec<Player> {
        vec![
            Player::new(1, "Bo", "Pug", "bo.png"),
            Player::new(2, "Rex", "Lab", "x.png"),
            Player::new(3, "Mia", "Corgi", "mia.png"),
        ]
    }

    #[test]
    fn one_card_per_player_in_server_order() {
        let players = roster();
        let content = render_player_list(&players);

        assert_eq!(content.len(), players.len());
        for (card, player) in content.iter().zip(&players) {
            assert_eq!(card.class.as_deref(), Some("player-card"));
            assert!(card.text_content().contains(&format!("Player ID: {}", player.id)));
            assert!(card.text_content().contains(&player.name));
            assert_eq!(
                card.find_tag("img").and_then(|img| img.get_attr("src")),
                Some(player.image_url.as_str())
            );
        }
    }

    #[test]
    fn empty_roster_renders_placeholder_only() {
        let content = render_player_list(&[]);
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].tag, "h3");
        assert_eq!(content[0].text.as_deref(), Some("No players available"));
        assert!(content[0].actions().is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let players = roster();
        assert_eq!(render_player_list(&players), render_player_list(&players));
    }

    #[test]
    fn every_card_binds_details_and_remove() {
        let content = render_player_list(&roster());
        let removes = content
            .iter()
            .flat_map(|card| card.actions())
            .filter(|action| matches!(action, Action::Remove(_)))
            .count();
        assert_eq!(removes, 3);
    }
}
