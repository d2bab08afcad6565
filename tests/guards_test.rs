use optional_playground::core::guards::{
    add_num_in_array, divide_two_numbers, negative_check, positive_check, report_optional_number,
};
use optional_playground::core::optionals::OptionalDouble;
use optional_playground::MemoryConsole;

#[test]
fn test_safe_division() {
    assert_eq!(divide_two_numbers(10, 0), 0);
    assert_eq!(divide_two_numbers(10, 2), 5);
    // 朝零截斷
    assert_eq!(divide_two_numbers(-7, 2), -3);
}

#[test]
fn test_guarded_sum() {
    let mut console = MemoryConsole::new();
    assert_eq!(add_num_in_array(&mut console, &[]).unwrap(), 0);
    assert_eq!(console.output(), "This value is nil\n");

    let mut console = MemoryConsole::new();
    assert_eq!(add_num_in_array(&mut console, &[1, 2, 3, 4, 5, 6]).unwrap(), 21);
    assert!(console.is_empty());
}

#[test]
fn test_sign_checks_with_playground_numbers() {
    let my_number = 10;
    let mut console = MemoryConsole::new();

    negative_check(&mut console, my_number).unwrap();
    positive_check(&mut console, -my_number).unwrap();

    assert_eq!(console.lines(), ["I am positive", "I am negative"]);
}

#[test]
fn test_presence_guard() {
    let mut console = MemoryConsole::new();

    report_optional_number(&mut console, Some(10)).unwrap();
    report_optional_number(&mut console, None).unwrap();

    assert_eq!(
        console.lines(),
        ["This unwrapped value is 10", "This value is nil"]
    );
}

#[test]
fn test_conditional_unwrap_is_safe_on_absent() {
    let my_double = OptionalDouble::new();
    assert!(my_double.conditional_unwrap().is_none());
}

#[test]
#[should_panic]
fn test_forced_unwrap_of_absent_value_panics() {
    let my_double = OptionalDouble::new();
    let _ = my_double.force_unwrap();
}
