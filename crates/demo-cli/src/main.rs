use clap::{Parser, Subcommand};
use color_views::{colorable, DEFAULT_PALETTE};
use nickname_form::NicknameForm;
use view_tree::{ClickRouter, Color, Screen, ViewId, ViewKind, ViewTree};

#[derive(Parser)]
#[command(name = "demo-cli")]
#[command(about = "Scripted driver for the color-views and nickname-form demo screens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, help = "Dump the final screen state as JSON")]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build the color-my-views screen and replay clicks on it
    Color {
        #[arg(
            value_name = "VIEW",
            help = "Views to click, in order (top, box1..box5)"
        )]
        clicks: Vec<String>,
    },
    /// Drive the nickname form through submit/reopen transitions
    Nickname {
        #[arg(
            long,
            value_name = "TEXT",
            help = "Type TEXT into the field and click the done button"
        )]
        submit: Vec<String>,

        #[arg(long, help = "Click the displayed label after the last submit")]
        reopen: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Color { clicks } => run_color(&clicks, cli.json),
        Command::Nickname { submit, reopen } => run_nickname(&submit, reopen, cli.json),
    }
}

struct ColorScreen {
    screen: Screen,
    root: ViewId,
    names: Vec<(&'static str, ViewId)>,
}

/// A layout with five labelled boxes. Boxes start on a white background
/// so the first click has a color to displace.
fn build_color_screen() -> ColorScreen {
    let mut tree = ViewTree::new();
    let root = tree.add_view(ViewKind::Layout);

    let mut names = vec![("top", root)];
    for (i, name) in ["box1", "box2", "box3", "box4", "box5"]
        .into_iter()
        .enumerate()
    {
        let boxed = tree.add_view(ViewKind::Label);
        let _ = tree.set_text(boxed, &format!("Box {}", i + 1));
        let _ = tree.set_background(boxed, Color::WHITE);
        if let Err(e) = tree.attach(root, boxed) {
            eprintln!("Error building screen: {e}");
            std::process::exit(1);
        }
        names.push((name, boxed));
    }

    ColorScreen {
        screen: Screen::new(tree),
        root,
        names,
    }
}

fn run_color(clicks: &[String], json: bool) {
    let ColorScreen {
        mut screen,
        root,
        names,
    } = build_color_screen();

    let mut router = ClickRouter::new();
    color_views::attach(
        &screen.tree,
        root,
        &DEFAULT_PALETTE,
        colorable(root),
        &mut router,
    );

    for name in clicks {
        let Some(&(_, id)) = names.iter().find(|(n, _)| *n == name.as_str()) else {
            eprintln!("Error: unknown view '{name}' (expected top or box1..box5)");
            std::process::exit(1);
        };
        router.click(&mut screen, id);
        println!("click {name} -> {}", describe_background(&screen.tree, id));
    }

    report(&screen, root, json);
}

fn run_nickname(submits: &[String], reopen: bool, json: bool) {
    let mut tree = ViewTree::new();
    let root = tree.add_view(ViewKind::Layout);
    let edit = tree.add_view(ViewKind::Edit);
    let done = tree.add_view(ViewKind::Button);
    let label = tree.add_view(ViewKind::Label);
    let _ = tree.set_text(done, "Done");

    for child in [edit, done, label] {
        if let Err(e) = tree.attach(root, child) {
            eprintln!("Error building screen: {e}");
            std::process::exit(1);
        }
    }

    let form = match NicknameForm::new(&mut tree, edit, done, label) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error wiring form: {e}");
            std::process::exit(1);
        }
    };

    let mut screen = Screen::new(tree);
    let mut router = ClickRouter::new();
    form.attach(&mut router);

    for text in submits {
        let _ = screen.tree.set_text(edit, text);
        screen.keyboard.show(edit);
        router.click(&mut screen, done);
        println!(
            "submit {text:?} -> label {:?} ({})",
            screen.tree.text(label),
            if screen.tree.is_visible(label) {
                "displayed"
            } else {
                "editing"
            }
        );
    }

    if reopen {
        router.click(&mut screen, label);
        println!(
            "reopen -> field {:?}, keyboard {}",
            screen.tree.text(edit),
            if screen.keyboard.is_visible() {
                "shown"
            } else {
                "hidden"
            }
        );
    }

    report(&screen, root, json);
}

fn describe_background(tree: &ViewTree, id: ViewId) -> String {
    tree.background(id)
        .map_or_else(|| "none".to_string(), |c| c.to_string())
}

fn report(screen: &Screen, root: ViewId, json: bool) {
    if json {
        match serde_json::to_string_pretty(screen) {
            Ok(dump) => println!("{dump}"),
            Err(e) => {
                eprintln!("Error serializing screen: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!();
    print_view(&screen.tree, root, 0);
    if screen.keyboard.is_visible() {
        println!("keyboard: shown");
    } else {
        println!("keyboard: hidden");
    }
}

fn print_view(tree: &ViewTree, id: ViewId, indent: usize) {
    let Some(view) = tree.get(id) else {
        return;
    };

    println!(
        "{:indent$}{} {:?} text={:?} background={} visible={}",
        "",
        view.kind.as_str(),
        id,
        view.text,
        describe_background(tree, id),
        view.visible,
        indent = indent * 2
    );

    for &child in tree.children(id) {
        print_view(tree, child, indent + 1);
    }
}
