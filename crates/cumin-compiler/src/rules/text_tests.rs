use crate::shot_cumin;

#[test]
fn literal_is_quoted_and_escaped() {
    shot_cumin!(r#"
        { "blocks": [ { "type": "text", "fields": { "TEXT": "it's" } } ] }
    "#, @r"'it\'s';");
}

#[test]
fn multiline_keeps_line_structure() {
    shot_cumin!(r#"
        { "blocks": [
            { "type": "text_multiline", "fields": { "TEXT": "a\nb" } },
            { "type": "text_multiline", "fields": { "TEXT": "single" } }
        ] }
    "#, @r"
    ('a' + '\n' +
    'b');

    'single';
    ");
}

#[test]
fn join_shape_depends_on_item_count() {
    shot_cumin!(r#"
        { "blocks": [
            { "type": "text_join", "extraState": { "itemCount": 0 } },
            {
                "type": "text_join",
                "extraState": { "itemCount": 1 },
                "inputs": { "ADD0": { "type": "variables_get", "fields": { "VAR": "x" } } }
            },
            {
                "type": "text_join",
                "inputs": {
                    "ADD0": { "type": "text", "fields": { "TEXT": "a" } },
                    "ADD1": { "type": "variables_get", "fields": { "VAR": "x" } }
                }
            },
            {
                "type": "text_join",
                "extraState": { "itemCount": 3 },
                "inputs": {
                    "ADD0": { "type": "text", "fields": { "TEXT": "a" } },
                    "ADD2": { "type": "variables_get", "fields": { "VAR": "x" } }
                }
            }
        ] }
    "#, @r"
    var x;


    '';

    String(x);

    'a' + String(x);

    ['a','',x].join('');
    ");
}

#[test]
fn join_items_stop_at_last_connected_slot() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_join",
                "extraState": { "itemCount": 1000000000000 },
                "inputs": { "ADD3": { "type": "variables_get", "fields": { "VAR": "x" } } }
            },
            { "type": "text_join", "extraState": { "itemCount": 5 } }
        ] }
    "#, @r"
    var x;


    ['','','',x].join('');

    '';
    ");
}

#[test]
fn append_forces_a_string() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_append",
                "fields": { "VAR": "s" },
                "inputs": { "TEXT": { "type": "variables_get", "fields": { "VAR": "t" } } },
                "next": {
                    "type": "text_append",
                    "fields": { "VAR": "s" },
                    "inputs": { "TEXT": { "type": "text", "fields": { "TEXT": "!" } } }
                }
            }
        ] }
    "#, @r"
    var s, t;


    s += String(t);
    s += '!';
    ");
}

#[test]
fn is_empty_brackets_a_join() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_isEmpty",
                "inputs": {
                    "VALUE": {
                        "type": "text_join",
                        "inputs": {
                            "ADD0": { "type": "text", "fields": { "TEXT": "a" } },
                            "ADD1": { "type": "text", "fields": { "TEXT": "b" } }
                        }
                    }
                }
            },
            {
                "type": "text_length",
                "inputs": { "VALUE": { "type": "text", "fields": { "TEXT": "abc" } } }
            }
        ] }
    "#, @r"
    !('a' + 'b').length;

    'abc'.length;
    ");
}

#[test]
fn index_of_last_occurrence() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_indexOf",
                "fields": { "END": "LAST" },
                "inputs": {
                    "VALUE": { "type": "variables_get", "fields": { "VAR": "s" } },
                    "FIND": { "type": "text", "fields": { "TEXT": "a" } }
                }
            }
        ] }
    "#, @r"
    var s;


    s.lastIndexOf('a');
    ");
}

#[test]
fn char_at_positions() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_charAt",
                "fields": { "WHERE": "FIRST" },
                "inputs": { "VALUE": { "type": "variables_get", "fields": { "VAR": "s" } } }
            },
            {
                "type": "text_charAt",
                "fields": { "WHERE": "LAST" },
                "inputs": { "VALUE": { "type": "variables_get", "fields": { "VAR": "s" } } }
            },
            {
                "type": "text_charAt",
                "fields": { "WHERE": "RANDOM" },
                "inputs": { "VALUE": { "type": "variables_get", "fields": { "VAR": "s" } } }
            }
        ] }
    "#, @r"
    var s;

    function textRandomLetter(text) {
      var x = Math.floor(Math.random() * text.length);
      return text[x];
    }


    s.charAt(0);

    s.slice(-1);

    textRandomLetter(s);
    ");
}

#[test]
fn substring_of_whole_text_is_the_text() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_getSubstring",
                "fields": { "WHERE1": "FIRST", "WHERE2": "LAST" },
                "inputs": { "STRING": { "type": "variables_get", "fields": { "VAR": "s" } } }
            }
        ] }
    "#, @r"
    var s;


    s;
    ");
}

#[test]
fn substring_between_dynamic_positions() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_getSubstring",
                "fields": { "WHERE1": "FROM_START", "WHERE2": "FROM_START" },
                "inputs": {
                    "STRING": { "type": "variables_get", "fields": { "VAR": "s" } },
                    "AT1": { "type": "variables_get", "fields": { "VAR": "a" } },
                    "AT2": { "type": "variables_get", "fields": { "VAR": "b" } }
                }
            }
        ] }
    "#, @r"
    var s, a, b;


    s.slice(a, (b + 1));
    ");
}

#[test]
fn substring_of_complex_text_uses_helper() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_getSubstring",
                "fields": { "WHERE1": "FROM_END", "WHERE2": "LAST" },
                "inputs": {
                    "STRING": {
                        "type": "text_reverse",
                        "inputs": { "TEXT": { "type": "variables_get", "fields": { "VAR": "s" } } }
                    }
                }
            }
        ] }
    "#, @r"
    var s;

    function subsequenceFromEndLast(sequence, at1) {
      var start = sequence.length - 1 - at1;
      var end = sequence.length - 1 + 1;
      return sequence.slice(start, end);
    }


    subsequenceFromEndLast(s.split('').reverse().join(''), 0);
    ");
}

#[test]
fn change_case_and_trim() {
    shot_cumin!(r#"
        { "blocks": [
            { "type": "text_changeCase", "inputs": { "TEXT": { "type": "text", "fields": { "TEXT": "a" } } } },
            { "type": "text_changeCase", "fields": { "CASE": "LOWERCASE" } },
            { "type": "text_trim", "fields": { "MODE": "LEFT" } },
            { "type": "text_trim", "fields": { "MODE": "RIGHT" } },
            { "type": "text_trim" }
        ] }
    "#, @r"
    'a'.toUpperCase();

    ''.toLowerCase();

    ''.replace(/^[\s\xa0]+/, '');

    ''.replace(/[\s\xa0]+$/, '');

    ''.trim();
    ");
}

#[test]
fn title_case_uses_helper() {
    shot_cumin!(r#"
        { "blocks": [ { "type": "text_changeCase", "fields": { "CASE": "TITLECASE" } } ] }
    "#, @r"
    function textToTitleCase(str) {
      return str.replace(/\S+/g,
          function(txt) {return txt[0].toUpperCase() + txt.substring(1).toLowerCase();});
    }


    textToTitleCase('');
    ");
}

#[test]
fn prompts() {
    shot_cumin!(r#"
        { "blocks": [
            { "type": "text_prompt", "fields": { "TEXT": "Name?" } },
            {
                "type": "text_prompt_ext",
                "fields": { "TYPE": "NUMBER" },
                "inputs": { "TEXT": { "type": "text", "fields": { "TEXT": "Age?" } } }
            }
        ] }
    "#, @r"
    window.prompt('Name?');

    Number(window.prompt('Age?'));
    ");
}

#[test]
fn count_uses_helper() {
    shot_cumin!(r#"
        { "blocks": [
            {
                "type": "text_count",
                "inputs": {
                    "TEXT": { "type": "variables_get", "fields": { "VAR": "s" } },
                    "SUB": { "type": "text", "fields": { "TEXT": "a" } }
                }
            }
        ] }
    "#, @r"
    var s;

    function textCount(haystack, needle) {
      if (needle.length === 0) {
        return haystack.length + 1;
      } else {
        return haystack.split(needle).length - 1;
      }
    }


    textCount(s, 'a');
    ");
}

#[test]
fn replace_uses_helper() {
    shot_cumin!(r#"
        { "blocks": [ { "type": "text_replace" } ] }
    "#, @r#"
    function textReplace(haystack, needle, replacement) {
      needle = needle.replace(/([-()\[\]{}+?*.$\^|,:#<!\\])/g,"\\$1")
                     .replace(/\x08/g,"\\x08");
      return haystack.replace(new RegExp(needle, 'g'), replacement);
    }


    textReplace('', '', '');
    "#);
}
