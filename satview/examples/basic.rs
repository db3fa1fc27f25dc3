// Example: a windowed list over a large table with selection and sorting.
use satview::{
    ComparatorTable, ListOptions, Row, SelectionSet, Sorter, VirtualList, WindowParams,
    compute_window,
};

#[derive(Clone, Debug)]
struct Item {
    id: String,
    name: String,
}

impl Row for Item {
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

fn main() {
    let window = compute_window(WindowParams {
        scroll_offset: 980,
        row_height: 49,
        viewport_height: 600,
        total_count: 1_000,
        buffer_size: 5,
    })
    .unwrap();
    println!("window={:?}", window.indices());

    let items: Vec<Item> = (0..100_000)
        .map(|i| Item {
            id: i.to_string(),
            name: format!("object-{:05}", 99_999 - i),
        })
        .collect();

    let mut sorter = Sorter::new(
        ComparatorTable::new()
            .with_numeric("id", |it: &Item| it.id.as_str())
            .with_text("name", |it: &Item| it.name.as_str()),
    );
    let mut rows = items.clone();
    sorter.sort(&mut rows);

    let mut list = VirtualList::new(ListOptions::new(), rows.len()).unwrap();
    println!("spacer_height={}", list.spacer_height());

    let mut selection = SelectionSet::new();
    selection.toggle("99990".to_owned());

    list.on_scroll(1_000);
    list.for_each_rendered_row(&rows, &selection, |row| {
        if row.selected {
            println!("selected row {} at top={}", row.index, row.top);
        }
    });

    sorter.apply_sort("id");
    sorter.sort(&mut rows);
    let off = list.scroll_to_index(rows.len() - 1);
    println!(
        "after scroll_to_index: offset={off} window={:?}",
        list.window()
    );
}
