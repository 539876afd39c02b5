use buildforge::analysis::{PriorityVector, RawScores};
use buildforge::api::{AuditRow, ItemRecommendation};
use buildforge::model::Character;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use itertools::Itertools;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_character(c: &Character) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Key"),
        Cell::new("Name"),
        Cell::new("Title"),
        Cell::new("Classes"),
        Cell::new("Resource"),
        Cell::new("Spells"),
    ]);
    table.add_row(vec![
        Cell::new(&c.id).add_attribute(Attribute::Bold),
        Cell::new(&c.key),
        Cell::new(&c.name),
        Cell::new(&c.title),
        Cell::new(c.tags.iter().join(", ")),
        Cell::new(&c.resource),
        Cell::new(c.spells.len()),
    ]);
    println!("\n{}", table);
}

pub fn print_priorities(raw: &RawScores, priorities: &PriorityVector) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Raw"),
        Cell::new("Priority").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=2);

    for (category, priority) in priorities.ranked() {
        let cell = Cell::new(format!("{:.2}", priority));
        let cell = if priority >= 1.0 {
            cell.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            cell.fg(Color::Cyan)
        };
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(format!("{:.1}", raw.get(category))),
            cell,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_items(title: &str, items: &[ItemRecommendation], with_reasons: bool) {
    println!("\n{} ({})", title, items.len());
    if items.is_empty() {
        return;
    }

    let mut table = new_table();
    let mut header = vec![
        Cell::new("#"),
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Cost"),
        Cell::new("Desc"),
        Cell::new("Attr"),
        Cell::new("Tags"),
        Cell::new("Mods"),
        Cell::new("Score").fg(Color::Cyan),
    ];
    if with_reasons {
        header.push(Cell::new("Why"));
    }
    table.add_row(header);
    align_right(&mut table, 3..=8);

    for (rank, rec) in items.iter().enumerate() {
        let b = &rec.scored.breakdown;
        let mods = if b.modifier_hits.is_empty() {
            "-".to_string()
        } else {
            b.modifier_hits
                .iter()
                .map(|h| format!("{} {:+.1}", h.modifier, h.delta))
                .join("\n")
        };
        let mut row = vec![
            Cell::new(rank + 1),
            Cell::new(&rec.name).add_attribute(Attribute::Bold),
            Cell::new(&rec.id),
            Cell::new(format!("{:.0}", rec.scored.item.total_cost)),
            Cell::new(format!("{:.2}", b.description)),
            Cell::new(format!("{:.2}", b.attributes)),
            Cell::new(format!("{:.2}", b.tags)),
            Cell::new(mods),
            Cell::new(format!("{:.2}", rec.scored.score)).fg(Color::Cyan),
        ];
        if with_reasons {
            row.push(Cell::new(rec.reasons.iter().map(|r| format!("- {}", r)).join("\n")));
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_audit(rows: &[AuditRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Top"),
        Cell::new("Heal"),
        Cell::new("AoE"),
        Cell::new("Core"),
        Cell::new("Boots"),
        Cell::new("Best item"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 4..=5);
    if let Some(col) = table.column_mut(7) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let flag = |b: bool| if b { "yes" } else { "" };
    for r in rows {
        let top = match r.top_category {
            Some(c) => Cell::new(c.label()),
            None => Cell::new("none").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&r.id).add_attribute(Attribute::Bold),
            top,
            Cell::new(flag(r.kit.healing)),
            Cell::new(flag(r.kit.area_damage)),
            Cell::new(r.primary_count),
            Cell::new(r.movement_count),
            Cell::new(r.best_item.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.2}", r.best_score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}
