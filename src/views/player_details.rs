// ============================================================================
// PLAYER DETAILS VIEW - Card de un jugador para la región detalle
// ============================================================================

use crate::models::Player;
use crate::views::node::{Action, ViewNode};
use crate::views::player_card::render_player_image;

/// Renderizar detalle: imagen, nombre, id, raza, estado/equipo si se conocen, y "volver"
pub fn render_player_details(player: &Player) -> ViewNode {
    let mut card = ViewNode::new("div")
        .id("single-player-card")
        .child(render_player_image(player))
        .child(ViewNode::new("h4").text(format!("Name: {}", player.name)))
        .child(ViewNode::new("p").text(format!("Player ID: {}", player.id)))
        .child(ViewNode::new("p").text(format!("Breed: {}", player.breed)));

    if let Some(status) = player.status.as_deref().filter(|s| !s.is_empty()) {
        card = card.child(ViewNode::new("p").text(format!("Status: {}", status)));
    }

    if let Some(team_id) = player.team_id {
        card = card.child(ViewNode::new("p").text(format!("Team: #{}", team_id)));
    }

    card.child(
        ViewNode::new("button")
            .id("back-button")
            .text("Back to all Players")
            .on_click(Action::Back),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_shows_name_id_and_breed() {
        let card = render_player_details(&Player::new(7, "Rex", "Lab", "x.png"));
        let text = card.text_content();
        assert!(text.contains("Rex"));
        assert!(text.contains("7"));
        assert!(text.contains("Lab"));
        assert_eq!(card.find_tag("img").and_then(|img| img.get_attr("alt")), Some("Rex"));
    }

    #[test]
    fn detail_has_single_back_control() {
        let card = render_player_details(&Player::new(7, "Rex", "Lab", "x.png"));
        assert_eq!(card.actions(), vec![Action::Back]);
    }

    #[test]
    fn optional_fields_only_when_present() {
        let mut player = Player::new(7, "Rex", "Lab", "x.png");
        assert!(!render_player_details(&player).text_content().contains("Status"));

        player.status = Some("field".to_string());
        player.team_id = Some(12);
        let text = render_player_details(&player).text_content();
        assert!(text.contains("Status: field"));
        assert!(text.contains("Team: #12"));
    }
}
