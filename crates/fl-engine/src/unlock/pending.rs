//! The staged unlock and its display metadata.

use fl_core::TableKind;
use uuid::Uuid;

use super::{Selection, UnlockCost};

/// An unlock drawn and priced but not yet paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUnlock {
    /// Identity used to discard stale image lookups.
    pub id: Uuid,
    /// What was selected.
    pub selection: Selection,
    /// Heading shown with the reveal.
    pub display_type: String,
    /// Icon URL, if one is known yet.
    pub image: Option<String>,
}

/// A cosmetic thumbnail lookup issued for a pending unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Pending unlock the answer belongs to.
    pub pending_id: Uuid,
    /// Wiki page title to look up.
    pub title: String,
}

impl PendingUnlock {
    /// Stage a selection, with its static icon if the table has one.
    pub fn new(selection: Selection, wiki_base: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_type: selection.table.to_string(),
            image: static_image(wiki_base, selection.table, selection.item),
            selection,
        }
    }

    /// Table of the staged item.
    pub fn table(&self) -> TableKind {
        self.selection.table
    }

    /// The staged item.
    pub fn item(&self) -> &'static str {
        self.selection.item
    }

    /// What confirming will cost.
    pub fn cost(&self) -> UnlockCost {
        self.selection.cost
    }

    /// The thumbnail lookup this unlock wants, if its table uses one.
    pub fn image_request(&self) -> Option<ImageRequest> {
        self.table().wants_wiki_image().then(|| ImageRequest {
            pending_id: self.id,
            title: wiki_title(self.item()).to_string(),
        })
    }

    /// Apply a lookup result. Returns false when the result belongs to a
    /// different (stale) pending unlock.
    pub fn apply_image(&mut self, pending_id: Uuid, url: String) -> bool {
        if pending_id != self.id {
            return false;
        }
        self.image = Some(url);
        true
    }
}

/// Wiki page title for an item whose name differs from its page.
pub fn wiki_title(item: &str) -> &str {
    match item {
        "Duel Arena / PvP Arena" => "PvP_Arena",
        "Miscellania & Etceteria" => "Miscellania",
        "Isle of Souls (Expanded)" => "Isle_of_Souls",
        "Shades of Mort'ton" => "Shades_of_Mort'ton",
        "Civitas illa Fortis" | "Intelligence Gathering" | "Vale Totems" => {
            "Civitas_illa_Fortis"
        }
        "Hunter's Guild" => "Hunter_Guild",
        "Mor Ul Rek (TzHaar City)" => "Mor_Ul_Rek",
        "Barrows Brothers" => "Barrows",
        "Iban Blast" => "Iban_Blast",
        "Mastering Mixology" => "Mixology",
        "Magic & Runes" => "Magic_store",
        "Archery & Ranged" => "Archery_store",
        "Melee Weaponry" => "Sword_shop",
        "Platebody & Armour" => "Armour_shop",
        "Food & Provisions" => "Food_shop",
        "Crafting Supplies" => "Crafting_store",
        "Farming & Herblore" => "Farming_shop",
        "Clothing & Vanity" => "Clothes_shop",
        "Mining & Smithing" => "Pickaxe_shop",
        "Looting Bag" => "Looting_bag",
        "Rune Pouch" => "Rune_pouch",
        "Seed Box" => "Seed_box",
        "Herb Sack" => "Herb_sack",
        "Gem Bag" => "Gem_bag",
        "Coal Bag" => "Coal_bag",
        "Fish Barrel" => "Fish_barrel",
        "Tackle Box" => "Tackle_box",
        "Bolt Pouch" => "Bolt_pouch",
        "Plank Sack" => "Plank_sack",
        "Log Basket" => "Log_basket",
        "Huntsman's Kit" => "Huntsman's_kit",
        other => other,
    }
}

/// Static icon URL known at staging time.
pub fn static_image(base: &str, table: TableKind, item: &str) -> Option<String> {
    let file = match table {
        TableKind::Skills => return Some(format!("{base}{item}_icon.png")),
        TableKind::Equipment => slot_icon(item)?,
        TableKind::Regions => "Globe_icon.png",
        _ => item_icon(item)?,
    };
    Some(format!("{base}{file}"))
}

fn slot_icon(slot: &str) -> Option<&'static str> {
    Some(match slot {
        "Head" => "Head_slot.png",
        "Cape" => "Cape_slot.png",
        "Neck" => "Neck_slot.png",
        "Ammo" => "Ammo_slot.png",
        "Weapon" => "Weapon_slot.png",
        "Body" => "Body_slot.png",
        "Shield" => "Shield_slot.png",
        "Legs" => "Legs_slot.png",
        "Gloves" => "Hands_slot.png",
        "Boots" => "Feet_slot.png",
        "Ring" => "Ring_slot.png",
        _ => return None,
    })
}

// Bosses and minigames rely on the wiki lookup instead.
fn item_icon(item: &str) -> Option<&'static str> {
    Some(match item {
        "Spirit Trees" => "Spirit_tree.png",
        "Fairy Rings" => "Fairy_ring.png",
        "Gnome Gliders" => "Gnome_glider.png",
        "Charter Ships" => "Trader_Stan.png",
        "Teleport Tablets" => "Teleport_to_house_%28tablet%29.png",
        "Jewelry Teleports" => "Games_necklace(8).png",
        "Canoes" => "Waka_canoe.png",
        "Balloon Transport" => "Origami_balloon.png",
        "Mine Carts" => "Minecart_%28Lovakengj_Minecart_Network%29.png",
        "Magic Carpets" => "Rug_Merchant_%281%29.png",
        "Wilderness Obelisks" => "Obelisk_%28Wilderness%2C_activated%29.png",
        "Minigame Teleports" => "Minigame_map_icon.png",
        "Ancient Magicks" => "Ancient_Magicks_icon.png",
        "Lunar Spellbook" => "Lunar_spells_icon.png",
        "Arceuus Spellbook" => "Arceuus_spells_icon.png",
        "Protection Prayers" => "Protect_from_Melee_icon.png",
        "High Alchemy" => "High_Level_Alchemy_icon.png",
        "Piety" => "Piety_icon.png",
        "Rigour" => "Rigour_icon.png",
        "Augury" => "Augury_icon.png",
        "Preserve" => "Preserve_icon.png",
        "Thralls" => "Resurrect_Greater_Zombie.png",
        "Vengeance" => "Vengeance_icon.png",
        "Bones to Peaches" => "Bones_to_Peaches_icon.png",
        "Charge" => "Charge_icon.png",
        "Dwarf Cannon" => "Dwarf_multicannon.png",
        "Looting Bag" => "Looting_bag.png",
        "Rune Pouch" => "Rune_pouch.png",
        "Seed Box" => "Seed_box.png",
        "Herb Sack" => "Herb_sack.png",
        "Gem Bag" => "Gem_bag.png",
        "Coal Bag" => "Coal_bag.png",
        "Fish Barrel" => "Fish_barrel.png",
        "Tackle Box" => "Tackle_box.png",
        "Bolt Pouch" => "Bolt_pouch.png",
        "Plank Sack" => "Plank_sack.png",
        "Huntsman's Kit" => "Huntsman's_kit.png",
        "Log Basket" => "Log_basket.png",
        "Costume Room" => "Oak_costume_room.png",
        "Chapel (Altars)" => "Altar_space.png",
        "Portal Chamber" => "Portal_(Construction).png",
        "Portal Nexus" => "Portal_nexus.png",
        "Superior Garden (Pools)" => "Ornate_pool_of_rejuvenation.png",
        "Achievement Gallery (Jewelry)" => "Jewellery_box.png",
        "Study (Lecterns)" => "Lectern.png",
        "Workshop (Repair)" => "Armour_stand_(Construction).png",
        "Kitchen (Shelves)" => "Oak_shelves_1.png",
        "Menagerie (Pets)" => "Pet_house_(oak).png",
        "Quest Hall (Glory)" => "Mounted_amulet_of_glory.png",
        "Combat Room (Dummy)" => "Undead_combat_dummy.png",
        "General Stores" => "General_store_icon.png",
        "Magic & Runes" => "Runes_icon.png",
        "Archery & Ranged" => "Bow_and_arrow_shop_icon.png",
        "Melee Weaponry" => "Sword_shop_icon.png",
        "Platebody & Armour" => "Armour_shop_icon.png",
        "Food & Provisions" => "Food_shop_icon.png",
        "Crafting Supplies" => "Crafting_shop_icon.png",
        "Farming & Herblore" => "Farming_shop_icon.png",
        "Clothing & Vanity" => "Clothes_shop_icon.png",
        "Slayer Masters" => "Slayer_icon.png",
        "Mining & Smithing" => "Pickaxe_shop_icon.png",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://oldschool.runescape.wiki/images/";

    fn staged(table: TableKind, item: &'static str) -> PendingUnlock {
        PendingUnlock::new(
            Selection {
                table,
                item,
                cost: UnlockCost::Keys(1),
            },
            BASE,
        )
    }

    #[test]
    fn skills_get_static_icon_and_no_lookup() {
        let pending = staged(TableKind::Skills, "Magic");
        assert_eq!(
            pending.image.as_deref(),
            Some("https://oldschool.runescape.wiki/images/Magic_icon.png")
        );
        assert_eq!(pending.image_request(), None);
        assert_eq!(pending.display_type, "Skills");
    }

    #[test]
    fn bosses_request_overridden_title() {
        let pending = staged(TableKind::Bosses, "Barrows Brothers");
        let request = pending.image_request().unwrap();
        assert_eq!(request.title, "Barrows");
        assert_eq!(request.pending_id, pending.id);
        assert_eq!(pending.image, None);
    }

    #[test]
    fn stale_image_discarded() {
        let mut first = staged(TableKind::Regions, "Falador");
        let second = staged(TableKind::Regions, "Taverley");
        assert!(!first.apply_image(second.id, "https://x/taverley.png".to_string()));
        assert!(first.image.as_deref().is_some_and(|i| i.ends_with("Globe_icon.png")));
        assert!(first.apply_image(first.id, "https://x/falador.png".to_string()));
        assert_eq!(first.image.as_deref(), Some("https://x/falador.png"));
    }

    #[test]
    fn static_icons() {
        assert_eq!(
            static_image(BASE, TableKind::Equipment, "Gloves").as_deref(),
            Some("https://oldschool.runescape.wiki/images/Hands_slot.png")
        );
        assert!(static_image(BASE, TableKind::Storage, "Seed Box").is_some());
        assert!(static_image(BASE, TableKind::Bosses, "Zulrah").is_none());
        for table in [TableKind::Mobility, TableKind::Arcana, TableKind::Housing, TableKind::Merchants] {
            for item in table.items() {
                assert!(static_image(BASE, table, item).is_some(), "{item}");
            }
        }
    }

    #[test]
    fn titles_pass_through() {
        assert_eq!(wiki_title("Zulrah"), "Zulrah");
        assert_eq!(wiki_title("Mastering Mixology"), "Mixology");
    }
}
