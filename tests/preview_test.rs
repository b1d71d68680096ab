use clean_folder::preview::{render, render_lines};
use clean_folder::structure::{count_nodes, FolderNode, PROJECT_STRUCTURE};

fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| !c.is_alphanumeric()).count()
}

#[test]
fn test_project_structure_preview() {
    let expected = "\
├── 00 Proj
├── 01 Video
│   ├── K 1
│   ├── K 2
│   ├── K 3
│   └── Audio
├── 02 Additional
├── 03 Music
├── 04 SFX
└── 05 Export";

    assert_eq!(render(PROJECT_STRUCTURE), expected);
}

#[test]
fn test_preview_shape() {
    let lines = render_lines(PROJECT_STRUCTURE);
    assert_eq!(lines.len(), 10);

    let video = lines.iter().find(|l| l.ends_with("01 Video")).unwrap();
    let audio = lines.iter().find(|l| l.ends_with("Audio")).unwrap();
    assert!(indent_of(audio) > indent_of(video));

    let top_level: Vec<&String> = lines.iter().filter(|l| indent_of(l) == 4).collect();
    assert_eq!(top_level.len(), 6);
    let (last, others) = top_level.split_last().unwrap();
    let marker = |l: &str| l.chars().next().unwrap();
    assert!(others.iter().all(|l| marker(l) != marker(last)));
}

#[test]
fn test_preview_is_deterministic() {
    assert_eq!(render(PROJECT_STRUCTURE), render(PROJECT_STRUCTURE));
}

#[test]
fn test_last_branch_children_use_blank_prefix() {
    const TREE: &[FolderNode] = &[
        FolderNode::leaf("a"),
        FolderNode::branch(
            "b",
            &[FolderNode::branch("c", &[FolderNode::leaf("d")]), FolderNode::leaf("e")],
        ),
    ];

    assert_eq!(
        render_lines(TREE),
        vec!["├── a", "└── b", "    ├── c", "    │   └── d", "    └── e"]
    );
    assert_eq!(render_lines(TREE).len(), count_nodes(TREE));
}

#[test]
fn test_empty_forest() {
    assert!(render_lines(&[]).is_empty());
    assert_eq!(render(&[]), "");
}
