//! Bindings for `KeeperRegistryBase`, the abstract core of the keeper registry 2.0.

use alloy::sol;

/// JSON ABI of `KeeperRegistryBase`, as emitted by the Solidity compiler.
pub const ABI: &str = include_str!("../../abi/KeeperRegistryBase.json");

sol! {
    #![sol(all_derives)]
    /// Shared storage, events and errors of the keeper registry v2.0. The
    /// contract is abstract, so there is no creation bytecode.
    #[allow(missing_docs)]
    #[sol(rpc, all_derives)]
    contract KeeperRegistryBase {
        enum PaymentModel {
            DEFAULT,
            ARBITRUM,
            OPTIMISM
        }

        struct Config {
            uint32 paymentPremiumPPB;
            uint32 flatFeeMicroLink;
            uint24 blockCountPerTurn;
            uint32 checkGasLimit;
            uint24 stalenessSeconds;
            uint16 gasCeilingMultiplier;
            uint96 minUpkeepSpend;
            uint32 maxPerformGas;
            uint256 fallbackGasPrice;
            uint256 fallbackLinkPrice;
            address transcoder;
            address registrar;
        }

        error ArrayHasNoEntries();
        error CannotCancel();
        error DuplicateEntry();
        error EmptyAddress();
        error GasLimitCanOnlyIncrease();
        error GasLimitOutsideRange();
        error IndexOutOfRange();
        error InsufficientFunds();
        error InvalidDataLength();
        error InvalidPayee();
        error InvalidRecipient();
        error KeepersMustTakeTurns();
        error MigrationNotPermitted();
        error NotAContract();
        error OnlyActiveKeepers();
        error OnlyCallableByAdmin();
        error OnlyCallableByLINKToken();
        error OnlyCallableByOwnerOrAdmin();
        error OnlyCallableByOwnerOrRegistrar();
        error OnlyCallableByPayee();
        error OnlyCallableByProposedAdmin();
        error OnlyCallableByProposedPayee();
        error OnlyPausedUpkeep();
        error OnlySimulatedBackend();
        error OnlyUnpausedUpkeep();
        error ParameterLengthError();
        error PaymentGreaterThanAllLINK();
        error TargetCheckReverted(bytes reason);
        error TranscoderNotSet();
        error UpkeepCancelled();
        error UpkeepNotCanceled();
        error UpkeepNotNeeded();
        error ValueNotChanged();

        event ConfigSet(Config config);
        event FundsAdded(uint256 indexed id, address indexed from, uint96 amount);
        event FundsWithdrawn(uint256 indexed id, uint256 amount, address to);
        event KeepersUpdated(address[] keepers, address[] payees);
        event OwnerFundsWithdrawn(uint96 amount);
        event OwnershipTransferRequested(address indexed from, address indexed to);
        event OwnershipTransferred(address indexed from, address indexed to);
        event Paused(address account);
        event PayeeshipTransferRequested(address indexed keeper, address indexed from, address indexed to);
        event PayeeshipTransferred(address indexed keeper, address indexed from, address indexed to);
        event PaymentWithdrawn(address indexed keeper, uint256 indexed amount, address indexed to, address payee);
        event Unpaused(address account);
        event UpkeepAdminTransferRequested(uint256 indexed id, address indexed from, address indexed to);
        event UpkeepAdminTransferred(uint256 indexed id, address indexed from, address indexed to);
        event UpkeepCanceled(uint256 indexed id, uint64 indexed atBlockHeight);
        event UpkeepCheckDataUpdated(uint256 indexed id, bytes newCheckData);
        event UpkeepGasLimitSet(uint256 indexed id, uint96 gasLimit);
        event UpkeepMigrated(uint256 indexed id, uint256 remainingBalance, address destination);
        event UpkeepPaused(uint256 indexed id);
        event UpkeepPerformed(uint256 indexed id, bool indexed success, address indexed from, uint96 payment, bytes performData);
        event UpkeepReceived(uint256 indexed id, uint256 startingBalance, address importedFrom);
        event UpkeepRegistered(uint256 indexed id, uint32 executeGas, address admin);
        event UpkeepUnpaused(uint256 indexed id);

        function ARB_NITRO_ORACLE() external view returns (address);
        function FAST_GAS_FEED() external view returns (address);
        function LINK() external view returns (address);
        function LINK_ETH_FEED() external view returns (address);
        function OPTIMISM_ORACLE() external view returns (address);
        function PAYMENT_MODEL() external view returns (PaymentModel);
        function REGISTRY_GAS_OVERHEAD() external view returns (uint256);
        function acceptOwnership() external;
        function owner() external view returns (address);
        function paused() external view returns (bool);
        function transferOwnership(address to) external;
    }
}
