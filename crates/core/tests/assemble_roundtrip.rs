use fatar_core::assemble::assemble;
use fatar_core::format::{parse, Member, MAGIC};

fn member(name: &str, content: &[u8]) -> Member {
    Member { name: name.to_string(), content: content.to_vec() }
}

fn reparse(bytes: &[u8]) -> Vec<Member> {
    parse(bytes).expect("assembled archive must parse").map(|m| m.expect("member")).collect()
}

#[test]
fn empty_member_set_produces_a_valid_empty_archive() {
    let bytes = assemble(Vec::new());
    assert_eq!(bytes, MAGIC);
    assert!(reparse(&bytes).is_empty());
}

#[test]
fn roundtrip_preserves_names_and_content_sorted_by_name() {
    let input = vec![
        member("zlib_compress.o", b"deflate code"),
        member("a.o", b"tiny"),
        member("memory.o", &[0u8, 1, 2, 3, 255]),
    ];
    let bytes = assemble(input);
    let out = reparse(&bytes);
    let names: Vec<&str> = out.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["a.o", "memory.o", "zlib_compress.o"]);
    assert_eq!(out[0].content, b"tiny");
    assert_eq!(out[1].content, [0u8, 1, 2, 3, 255]);
    assert_eq!(out[2].content, b"deflate code");
}

#[test]
fn odd_sized_members_are_padded_not_merged_into_the_next_header() {
    let input = vec![member("a.o", b"odd"), member("b.o", b"x"), member("c.o", b"even")];
    let out = reparse(&assemble(input));
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].content, b"odd");
    assert_eq!(out[1].content, b"x");
    assert_eq!(out[2].content, b"even");
}

#[test]
fn long_names_roundtrip_via_the_extended_convention() {
    let long = "a_rather_long_object_file_name_from_a_nested_build_dir.o";
    assert!(long.len() > 16);
    let bytes = assemble(vec![member(long, b"payload")]);
    // The name cannot fit the 16-byte field, so the header must carry the
    // extended marker.
    assert!(bytes.windows(3).any(|w| w == b"#1/"), "expected an extended-name header");
    let out = reparse(&bytes);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, long);
    assert_eq!(out[0].content, b"payload");
}

#[test]
fn names_with_spaces_roundtrip_via_the_extended_convention() {
    // A space would be eaten by the right-trim of the in-field encoding.
    let bytes = assemble(vec![member("odd name.o", b"data")]);
    let out = reparse(&bytes);
    assert_eq!(out[0].name, "odd name.o");
    assert_eq!(out[0].content, b"data");
}

#[test]
fn zero_byte_members_roundtrip() {
    let out = reparse(&assemble(vec![member("empty.o", b""), member("full.o", b"ff")]));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "empty.o");
    assert!(out[0].content.is_empty());
}

#[test]
fn assembly_is_deterministic_for_a_fixed_member_set() {
    let build = || {
        vec![
            member("b.o", b"bbb"),
            member("a.o", b"aaa"),
            member("c.o", b"ccc"),
        ]
    };
    assert_eq!(assemble(build()), assemble(build()));
}

#[test]
fn ordering_is_independent_of_input_order() {
    let forward = assemble(vec![member("a.o", b"aaa"), member("b.o", b"bbb")]);
    let reverse = assemble(vec![member("b.o", b"bbb"), member("a.o", b"aaa")]);
    assert_eq!(forward, reverse);
}
