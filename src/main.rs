use label_tree::AvlTree;
use tracing_subscriber::EnvFilter;

const NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Gemma", "Hannah", "Isabel", "Jack",
];

fn show(tree: &AvlTree) {
    match tree.render() {
        Ok(canvas) => print!("{}", canvas),
        Err(err) => println!("({})", err),
    }
}

fn rotation_case(title: &str, setup: &[&str], action: &str, apply: impl FnOnce(&mut AvlTree)) {
    println!("\n{}", title);
    let mut tree: AvlTree = setup.iter().collect();
    show(&tree);

    println!("{}", action);
    apply(&mut tree);
    show(&tree);
    println!("Balance factor = {}", tree.balance_factor());
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Demonstrating Rotations...");

    rotation_case(
        "Case 1: Inserting node in left subtree.",
        &["Alice", "Bob"],
        "Inserting Charlie.",
        |tree| tree.insert("Charlie"),
    );
    rotation_case(
        "Case 2: Inserting node in right subtree.",
        &["Bob", "Charlie"],
        "Inserting Alice.",
        |tree| tree.insert("Alice"),
    );
    rotation_case(
        "Case 3: Deleting node in left subtree.",
        &["Alice", "Bob", "Charlie"],
        "Deleting Charlie.",
        |tree| {
            tree.remove("Charlie");
        },
    );
    rotation_case(
        "Case 4: Deleting node in right subtree.",
        &["Alice", "Bob", "Charlie"],
        "Deleting Alice.",
        |tree| {
            tree.remove("Alice");
        },
    );

    println!("\nTesting Implementation...");

    println!("\nInserting {} items into tree: ", NAMES.len());
    let mut tree = AvlTree::new();
    for name in NAMES.iter() {
        println!("Inserting {}.", name);
        tree.insert(name);
        show(&tree);
    }

    println!("In-order traversal of AVL tree:");
    println!("{}", tree.iter().collect::<Vec<&str>>().join(" "));

    println!("\nDeleting 5 elements from tree: ");
    for name in NAMES.iter().step_by(2) {
        println!("\nDeleting {}.", name);
        tree.remove(name);
        show(&tree);
    }

    println!("In-order traversal of AVL tree after deletion:");
    println!("{}", tree.iter().collect::<Vec<&str>>().join(" "));

    println!("\nSearching for 5 elements from tree: ");
    for name in NAMES.iter().take(5) {
        println!("\nSearching for {}.", name);
        match tree.search(name) {
            Some(node) => println!("Found name: {}", node.key()),
            None => println!("Name {} not found", name),
        }
    }
}
