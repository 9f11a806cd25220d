use simproc::prelude::*;

fn op(opcode: Opcode) -> Instruction {
    Instruction::absolute(opcode, 0, 0)
}

fn machine(text: Vec<Instruction>, dataend: Word) -> Interpreter {
    Interpreter::with_program(Image::new(text, vec![0; 16], dataend))
}

#[test]
fn conditional_branch_on_zero_skips_the_fallthrough() {
    let mut vm = machine(
        vec![
            Instruction::immediate(Opcode::LOAD, 1, 0),
            Instruction::absolute(Opcode::BRANCH, Condition::EQ as RegisterId, 3),
            Instruction::immediate(Opcode::LOAD, 2, 9),
            Instruction::immediate(Opcode::LOAD, 2, 1),
            op(Opcode::HALT),
        ],
        8,
    );

    assert_eq!(Ok(ExecuteState::Halted(4)), vm.run());
    assert_eq!(1, vm.registers()[2]);
    assert_eq!(ConditionCode::Positive, vm.cc());
}

#[test]
fn branches_fall_through_when_the_condition_fails() {
    let mut vm = machine(
        vec![
            Instruction::immediate(Opcode::LOAD, 1, 5),
            Instruction::absolute(Opcode::BRANCH, Condition::EQ as RegisterId, 0),
        ],
        8,
    );

    vm.step().expect("load #5");
    vm.step().expect("branch eq");

    assert_eq!(2, vm.pc());
    assert_eq!(ConditionCode::Positive, vm.cc());
}

#[test]
fn unknown_cc_satisfies_only_nc_and_ne() {
    for (condition, taken) in [
        (Condition::NC, true),
        (Condition::EQ, false),
        (Condition::NE, true),
        (Condition::GT, false),
        (Condition::GE, false),
        (Condition::LT, false),
        (Condition::LE, false),
    ] {
        let mut vm = machine(
            vec![Instruction::absolute(Opcode::BRANCH, condition as RegisterId, 5)],
            8,
        );

        vm.step().expect("branch under unknown cc");

        let expected = if taken { 5 } else { 1 };
        assert_eq!(expected, vm.pc(), "{condition} under U");
    }
}

#[test]
fn conditions_outside_the_set_fault() {
    for raw in [7, 9, 15] {
        let mut vm = machine(vec![Instruction::absolute(Opcode::BRANCH, raw, 0)], 8);

        assert_eq!(Err(Fault::new(FaultReason::Condition, 0)), vm.step());
    }
}

#[test]
fn branch_and_call_reject_immediate_targets() {
    for opcode in [Opcode::BRANCH, Opcode::CALL] {
        let mut vm = machine(vec![Instruction::immediate(opcode, 0, 1)], 8);

        assert_eq!(Err(Fault::new(FaultReason::Immediate, 0)), vm.step());
    }
}

#[test]
fn branch_targets_are_checked_at_the_next_fetch() {
    let mut vm = machine(
        vec![Instruction::absolute(Opcode::BRANCH, Condition::NC as RegisterId, 7)],
        8,
    );

    vm.step().expect("the branch itself does not fault");
    assert_eq!(7, vm.pc());

    assert_eq!(Err(Fault::new(FaultReason::SegText, 6)), vm.step());
}

#[test]
fn call_and_ret_are_symmetric() {
    let mut vm = machine(
        vec![
            Instruction::absolute(Opcode::CALL, Condition::NC as RegisterId, 3),
            op(Opcode::HALT),
            op(Opcode::NOP),
            Instruction::immediate(Opcode::LOAD, 0, 42),
            op(Opcode::RET),
        ],
        8,
    );

    assert_eq!(Ok(ExecuteState::Halted(1)), vm.run());
    assert_eq!(42, vm.registers()[0]);
    assert_eq!(15, vm.sp());
    assert_eq!(1, vm.data()[15]);
}

#[test]
fn call_and_ret_leave_the_condition_code_alone() {
    let mut vm = machine(
        vec![
            Instruction::immediate(Opcode::LOAD, 1, 7),
            Instruction::absolute(Opcode::CALL, Condition::NC as RegisterId, 3),
            op(Opcode::HALT),
            op(Opcode::RET),
        ],
        8,
    );

    assert_eq!(Ok(ExecuteState::Halted(2)), vm.run());
    assert_eq!(ConditionCode::Positive, vm.cc());
}

#[test]
fn untaken_calls_leave_no_side_effects() {
    let mut vm = machine(
        vec![
            Instruction::absolute(Opcode::CALL, Condition::EQ as RegisterId, 3),
            op(Opcode::HALT),
        ],
        8,
    );

    assert_eq!(Ok(ExecuteState::Halted(1)), vm.run());
    assert_eq!(15, vm.sp());
    assert_eq!(0, vm.data()[15]);
}

#[test]
fn recursive_calls_overflow_the_stack_region() {
    let mut vm = Interpreter::with_program(Image::new(
        vec![Instruction::absolute(Opcode::CALL, Condition::NC as RegisterId, 0)],
        vec![0; 16],
        14,
    ));

    assert_eq!(Err(Fault::new(FaultReason::SegStack, 0)), vm.run());
    assert_eq!(13, vm.sp());
}

#[test]
fn ret_above_the_stack_top_faults() {
    let mut vm = machine(vec![op(Opcode::RET)], 8);

    assert_eq!(Err(Fault::new(FaultReason::SegStack, 0)), vm.step());
}

#[test]
fn straight_line_execution_advances_pc_by_one() {
    let mut vm = machine(vec![op(Opcode::NOP), op(Opcode::NOP)], 8);

    for expected in 1..=2 {
        vm.step().expect("nop");
        assert_eq!(expected, vm.pc());
    }
}

#[test]
fn fetching_past_the_text_segment_faults() {
    let mut vm = machine(vec![op(Opcode::NOP)], 8);

    vm.step().expect("nop");
    assert_eq!(Err(Fault::new(FaultReason::SegText, 0)), vm.step());
}

#[test]
fn illop_and_unknown_opcodes_fault() {
    let mut vm = machine(vec![op(Opcode::ILLOP)], 8);
    assert_eq!(Err(Fault::new(FaultReason::Illegal, 0)), vm.step());

    let mut vm = machine(vec![Instruction::from_word(0x3f)], 8);
    assert_eq!(Err(Fault::new(FaultReason::Unknown, 0)), vm.step());
}

#[test]
fn halting_reports_the_operator_warning() {
    let mut vm = machine(vec![op(Opcode::HALT)], 8);

    let state = vm.step().expect("halt");
    assert_eq!(Some(Warning::Halt(0)), state.warning());
    assert!(!state.should_continue());
}
