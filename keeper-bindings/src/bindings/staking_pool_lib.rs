//! Bindings for the `StakingPoolLib` library.

use alloy::sol;

/// JSON ABI of `StakingPoolLib`, as emitted by the Solidity compiler.
pub const ABI: &str = include_str!("../../abi/StakingPoolLib.json");

sol! {
    #![sol(all_derives)]
    /// Staking pool bookkeeping library. It has no external functions; the
    /// binding carries its events and errors for decoding staking logs and
    /// reverts.
    #[allow(missing_docs)]
    #[sol(rpc, all_derives, bytecode = "60566037600b82828239805160001a607314602a57634e487b7160e01b600052600060045260246000fd5b30600052607381538281f3fe73000000000000000000000000000000000000000030146080604052600080fdfea26469706673582212209b798aabab54b035809e86f88a28bf9c95266d3cec8e464dd973991d9d3c2c3f64736f6c63430008100033")]
    contract StakingPoolLib {
        error ExcessiveStakeAmount(uint256 remainingAmount);
        error ExistingStakeFound(address staker);
        error InadequateInitialOperatorsCount(uint256 currentOperatorsCount, uint256 minInitialOperatorsCount);
        error InsufficientRemainingPoolSpace(uint256 remainingPoolSize, uint256 requiredPoolSize);
        error InsufficientStakeAmount(uint256 requiredAmount);
        error InvalidMaxStakeAmount(uint256 maxStakeAmount);
        error InvalidPoolSize(uint256 maxPoolSize);
        error InvalidPoolStatus(bool currentStatus, bool requiredStatus);
        error OperatorAlreadyExists(address operator);
        error OperatorDoesNotExist(address operator);
        error OperatorIsAssignedToFeed(address operator);
        error OperatorIsLocked(address operator);
        error StakeNotFound(address staker);

        event FeedOperatorsSet(address[] feedOperators);
        event MaxCommunityStakeAmountIncreased(uint256 maxStakeAmount);
        event MaxOperatorStakeAmountIncreased(uint256 maxStakeAmount);
        event OperatorAdded(address operator);
        event OperatorRemoved(address operator, uint256 amount);
        event PoolConcluded();
        event PoolOpened();
        event PoolSizeIncreased(uint256 maxPoolSize);
    }
}
